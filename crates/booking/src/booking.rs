use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use innkeep_core::{BookingId, Entity};

use crate::user::AadharNumber;

/// Inbound booking request. The store assigns the id and computes the amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub hotel_name: String,
    pub booking_aadhar_card: AadharNumber,
    pub no_of_rooms: u32,
    #[serde(default)]
    pub booking_person_name: String,
}

impl BookingRequest {
    pub fn new(
        hotel_name: impl Into<String>,
        booking_aadhar_card: u64,
        no_of_rooms: u32,
    ) -> Self {
        Self {
            hotel_name: hotel_name.into(),
            booking_aadhar_card: AadharNumber(booking_aadhar_card),
            no_of_rooms,
            booking_person_name: String::new(),
        }
    }

    pub fn with_person_name(mut self, name: impl Into<String>) -> Self {
        self.booking_person_name = name.into();
        self
    }
}

/// An accepted booking. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    booking_id: BookingId,
    booking_aadhar_card: AadharNumber,
    no_of_rooms: u32,
    booking_person_name: String,
    hotel_name: String,
    amount_to_be_paid: u64,
    booked_at: DateTime<Utc>,
}

impl Booking {
    pub(crate) fn accept(
        booking_id: BookingId,
        request: BookingRequest,
        amount_to_be_paid: u64,
        booked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            booking_id,
            booking_aadhar_card: request.booking_aadhar_card,
            no_of_rooms: request.no_of_rooms,
            booking_person_name: request.booking_person_name,
            hotel_name: request.hotel_name,
            amount_to_be_paid,
            booked_at,
        }
    }

    pub fn booking_id(&self) -> BookingId {
        self.booking_id
    }

    pub fn user(&self) -> AadharNumber {
        self.booking_aadhar_card
    }

    pub fn no_of_rooms(&self) -> u32 {
        self.no_of_rooms
    }

    pub fn booking_person_name(&self) -> &str {
        &self.booking_person_name
    }

    pub fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    pub fn amount_to_be_paid(&self) -> u64 {
        self.amount_to_be_paid
    }

    pub fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }
}

impl Entity for Booking {
    type Id = BookingId;

    fn id(&self) -> &Self::Id {
        &self.booking_id
    }
}
