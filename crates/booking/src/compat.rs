//! Legacy result encoding for request-handling layers.
//!
//! Existing callers expect `"SUCCESS"`/`"FAILURE"` from hotel registration,
//! `-1` from a booking that does not fit and `""` when no hotel has any
//! facility. These functions translate the store's typed results into those
//! values. Failures the legacy contract has no value for (unknown hotels) are
//! still returned as [`DomainError`].

use serde::{Deserialize, Serialize};

use innkeep_core::{DomainError, DomainResult};

use crate::booking::BookingRequest;
use crate::facility::Facility;
use crate::hotel::Hotel;
use crate::id_gen::BookingIdGenerator;
use crate::store::BookingStore;
use crate::user::{AadharNumber, User};

pub const SUCCESS: &str = "SUCCESS";
pub const FAILURE: &str = "FAILURE";
pub const NOT_ENOUGH_ROOMS: i64 = -1;

/// Hotel payload as received from callers; the name may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    #[serde(default)]
    pub hotel_name: Option<String>,
    #[serde(default)]
    pub available_rooms: u32,
    #[serde(default)]
    pub facilities: Vec<Facility>,
    #[serde(default)]
    pub price_per_night: u64,
}

impl HotelRecord {
    pub fn into_hotel(self) -> DomainResult<Hotel> {
        let name = self
            .hotel_name
            .ok_or_else(|| DomainError::validation("hotel name is required"))?;
        Ok(Hotel::new(name, self.available_rooms, self.price_per_night)
            .with_facilities(self.facilities))
    }
}

/// `"SUCCESS"` if the hotel was added, `"FAILURE"` if it is absent, unnamed or
/// already registered.
pub fn add_hotel<G: BookingIdGenerator>(
    store: &BookingStore<G>,
    hotel: Option<HotelRecord>,
) -> &'static str {
    let added = hotel
        .ok_or_else(|| DomainError::validation("hotel is required"))
        .and_then(HotelRecord::into_hotel)
        .and_then(|hotel| store.register_hotel(hotel));
    match added {
        Ok(()) => SUCCESS,
        Err(_) => FAILURE,
    }
}

pub fn add_user<G: BookingIdGenerator>(store: &BookingStore<G>, user: User) -> AadharNumber {
    store.register_user(user)
}

/// Hotel name, or `""` when no hotel has a facility.
pub fn hotel_with_most_facilities<G: BookingIdGenerator>(store: &BookingStore<G>) -> String {
    store.hotel_with_most_facilities().unwrap_or_default()
}

/// Amount to be paid, or `-1` when the hotel lacks the rooms.
pub fn book_a_room<G: BookingIdGenerator>(
    store: &BookingStore<G>,
    request: BookingRequest,
) -> DomainResult<i64> {
    match store.book_room(request) {
        Ok(booking) => i64::try_from(booking.amount_to_be_paid())
            .map_err(|_| DomainError::validation("booking amount exceeds legacy range")),
        Err(DomainError::InsufficientRooms { .. }) => Ok(NOT_ENOUGH_ROOMS),
        Err(err) => Err(err),
    }
}

pub fn get_bookings<G: BookingIdGenerator>(store: &BookingStore<G>, user: AadharNumber) -> usize {
    store.count_bookings(user)
}

pub fn update_facilities<G: BookingIdGenerator>(
    store: &BookingStore<G>,
    new_facilities: Vec<Facility>,
    hotel_name: &str,
) -> DomainResult<Hotel> {
    store.update_facilities(new_facilities, hotel_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::id_gen::SequentialBookingIds;

    fn test_store() -> BookingStore<SequentialBookingIds> {
        BookingStore::with_id_generator(StoreConfig::default(), SequentialBookingIds::new())
    }

    fn record(name: Option<&str>, rooms: u32, price: u64) -> HotelRecord {
        HotelRecord {
            hotel_name: name.map(str::to_string),
            available_rooms: rooms,
            facilities: Vec::new(),
            price_per_night: price,
        }
    }

    #[test]
    fn add_hotel_reports_success_then_failure() {
        let store = test_store();
        assert_eq!(add_hotel(&store, Some(record(Some("Taj"), 3, 100))), SUCCESS);
        assert_eq!(add_hotel(&store, Some(record(Some("Taj"), 3, 100))), FAILURE);
    }

    #[test]
    fn add_hotel_fails_for_missing_hotel_or_name() {
        let store = test_store();
        assert_eq!(add_hotel(&store, None), FAILURE);
        assert_eq!(add_hotel(&store, Some(record(None, 3, 100))), FAILURE);
        assert_eq!(store.hotel_count(), 0);
    }

    #[test]
    fn add_hotel_accepts_empty_and_blank_names() {
        let store = test_store();
        assert_eq!(add_hotel(&store, Some(record(Some(""), 3, 100))), SUCCESS);
        assert_eq!(add_hotel(&store, Some(record(Some(" "), 3, 100))), SUCCESS);
        assert_eq!(add_hotel(&store, Some(record(Some(""), 1, 1))), FAILURE);
        assert_eq!(store.hotel("").unwrap().price_per_night(), 100);
        assert_eq!(store.hotel_count(), 2);
    }

    #[test]
    fn empty_ranking_is_empty_string() {
        let store = test_store();
        assert_eq!(hotel_with_most_facilities(&store), "");
    }

    #[test]
    fn book_a_room_uses_minus_one_for_insufficient_rooms() {
        let store = test_store();
        add_hotel(&store, Some(record(Some("Taj"), 2, 100)));

        assert_eq!(book_a_room(&store, BookingRequest::new("Taj", 9, 3)).unwrap(), NOT_ENOUGH_ROOMS);
        assert_eq!(get_bookings(&store, AadharNumber(9)), 0);
        assert_eq!(book_a_room(&store, BookingRequest::new("Taj", 9, 2)).unwrap(), 200);
        assert_eq!(get_bookings(&store, AadharNumber(9)), 1);
    }

    #[test]
    fn book_a_room_unknown_hotel_stays_an_error() {
        let err = book_a_room(&test_store(), BookingRequest::new("Nowhere", 9, 1)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
