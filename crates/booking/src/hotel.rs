use serde::Serialize;

use innkeep_core::{DomainError, DomainResult, Entity};

use crate::facility::Facility;

/// A hotel, keyed by its unique name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    hotel_name: String,
    available_rooms: u32,
    facilities: Vec<Facility>,
    price_per_night: u64,
}

impl Hotel {
    /// Create a hotel with no facilities. Any string is a valid name.
    pub fn new(hotel_name: impl Into<String>, available_rooms: u32, price_per_night: u64) -> Self {
        Self {
            hotel_name: hotel_name.into(),
            available_rooms,
            facilities: Vec::new(),
            price_per_night,
        }
    }

    pub fn with_facilities(mut self, facilities: impl IntoIterator<Item = Facility>) -> Self {
        self.facilities = facilities.into_iter().collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.hotel_name
    }

    pub fn available_rooms(&self) -> u32 {
        self.available_rooms
    }

    pub fn price_per_night(&self) -> u64 {
        self.price_per_night
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Number of facility entries, duplicates included.
    pub fn facility_count(&self) -> usize {
        self.facilities.len()
    }

    pub fn has_facility(&self, facility: &Facility) -> bool {
        self.facilities.contains(facility)
    }

    /// Total price for `rooms` rooms at this hotel's nightly rate.
    pub fn price_for(&self, rooms: u32) -> DomainResult<u64> {
        self.price_per_night
            .checked_mul(u64::from(rooms))
            .ok_or_else(|| DomainError::validation("booking amount overflows"))
    }

    /// Entries of `proposed` the hotel does not already offer.
    ///
    /// Only checked against the current facilities, so repeats inside
    /// `proposed` all survive.
    pub fn extra_facilities(&self, proposed: impl IntoIterator<Item = Facility>) -> Vec<Facility> {
        proposed
            .into_iter()
            .filter(|facility| !self.has_facility(facility))
            .collect()
    }

    pub(crate) fn replace_facilities(&mut self, facilities: Vec<Facility>) {
        self.facilities = facilities;
    }

    pub(crate) fn append_facilities(&mut self, facilities: Vec<Facility>) {
        self.facilities.extend(facilities);
    }

    /// Caller must have checked `rooms <= available_rooms`.
    pub(crate) fn reserve_rooms(&mut self, rooms: u32) {
        self.available_rooms -= rooms;
    }
}

impl Entity for Hotel {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.hotel_name
    }
}
