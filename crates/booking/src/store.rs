//! In-memory booking store.
//!
//! Hotels, users and bookings live in three maps behind a single `RwLock`, so
//! every operation (including the check-then-insert of a booking) observes and
//! mutates a consistent state.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;

use innkeep_core::{BookingId, DomainError, DomainResult, Entity};

use crate::booking::{Booking, BookingRequest};
use crate::config::{FacilityUpdate, RoomAccounting, StoreConfig};
use crate::facility::Facility;
use crate::hotel::Hotel;
use crate::id_gen::{BookingIdGenerator, RandomBookingIds};
use crate::user::{AadharNumber, User};

/// Attempts at drawing an unused booking id before giving up.
const MAX_ID_DRAWS: usize = 8;

#[derive(Debug, Default)]
struct State {
    hotels: HashMap<String, Hotel>,
    users: HashMap<AadharNumber, User>,
    bookings: HashMap<BookingId, Booking>,
}

/// Insert `entity` under its own key unless the key is taken. First write wins.
fn insert_if_absent<E: Entity>(map: &mut HashMap<E::Id, E>, entity: E) -> bool {
    match map.entry(entity.id().clone()) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(entity);
            true
        }
    }
}

#[derive(Debug)]
pub struct BookingStore<G = RandomBookingIds> {
    config: StoreConfig,
    ids: G,
    state: RwLock<State>,
}

impl BookingStore {
    /// Empty store with default behavior and random booking ids.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_id_generator(config, RandomBookingIds)
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: BookingIdGenerator> BookingStore<G> {
    pub fn with_id_generator(config: StoreConfig, ids: G) -> Self {
        Self {
            config,
            ids,
            state: RwLock::new(State::default()),
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a hotel under its name.
    ///
    /// Fails with `Conflict` if a hotel with that name is already registered;
    /// the stored hotel is left untouched.
    pub fn register_hotel(&self, hotel: Hotel) -> DomainResult<()> {
        let name = hotel.name().to_string();
        if !insert_if_absent(&mut self.write().hotels, hotel) {
            debug!(hotel = %name, "hotel registration rejected: duplicate name");
            return Err(DomainError::conflict(format!("hotel {name} already exists")));
        }
        debug!(hotel = %name, "hotel registered");
        Ok(())
    }

    /// Register a user and return its key.
    ///
    /// Re-registering an existing key keeps the first record.
    pub fn register_user(&self, user: User) -> AadharNumber {
        let id = user.aadhar_card_no;
        if insert_if_absent(&mut self.write().users, user) {
            debug!(user = %id, "user registered");
        }
        id
    }

    /// Name of the hotel with the most facilities.
    ///
    /// Ties go to the lexicographically smallest name. `None` when no hotel has
    /// at least one facility.
    pub fn hotel_with_most_facilities(&self) -> Option<String> {
        let state = self.read();
        state
            .hotels
            .values()
            .filter(|hotel| hotel.facility_count() > 0)
            .min_by(|a, b| {
                b.facility_count()
                    .cmp(&a.facility_count())
                    .then_with(|| a.name().cmp(b.name()))
            })
            .map(|hotel| hotel.name().to_string())
    }

    /// Book rooms at a hotel.
    ///
    /// Availability is checked against the hotel's room count; whether that
    /// count is consumed depends on [`RoomAccounting`]. Nothing is stored on
    /// failure.
    pub fn book_room(&self, request: BookingRequest) -> DomainResult<Booking> {
        if request.no_of_rooms == 0 {
            return Err(DomainError::validation("number of rooms must be positive"));
        }

        let mut guard = self.write();
        let state = &mut *guard;

        let hotel = state
            .hotels
            .get_mut(&request.hotel_name)
            .ok_or_else(|| DomainError::not_found(format!("hotel {}", request.hotel_name)))?;

        if hotel.available_rooms() < request.no_of_rooms {
            debug!(
                hotel = %request.hotel_name,
                requested = request.no_of_rooms,
                available = hotel.available_rooms(),
                "booking rejected: not enough rooms"
            );
            return Err(DomainError::insufficient_rooms(
                hotel.name(),
                request.no_of_rooms,
                hotel.available_rooms(),
            ));
        }

        let amount = hotel.price_for(request.no_of_rooms)?;
        let issued = &state.bookings;
        let booking_id = (0..MAX_ID_DRAWS)
            .map(|_| self.ids.next_id())
            .find(|id| !issued.contains_key(id))
            .ok_or_else(|| {
                DomainError::conflict(format!("no unused booking id after {MAX_ID_DRAWS} draws"))
            })?;

        if self.config.room_accounting == RoomAccounting::Depleting {
            hotel.reserve_rooms(request.no_of_rooms);
        }

        let booking = Booking::accept(booking_id, request, amount, Utc::now());
        debug!(
            booking = %booking_id,
            hotel = %booking.hotel_name(),
            rooms = booking.no_of_rooms(),
            amount,
            "booking accepted"
        );
        state.bookings.insert(booking_id, booking.clone());
        Ok(booking)
    }

    /// Number of bookings made by `user`.
    pub fn count_bookings(&self, user: AadharNumber) -> usize {
        self.read()
            .bookings
            .values()
            .filter(|booking| booking.user() == user)
            .count()
    }

    /// Offer `new_facilities` to a hotel.
    ///
    /// Entries the hotel already has are dropped; repeats of new entries are
    /// kept. Under [`FacilityUpdate::Replace`] the survivors become the hotel's
    /// entire facility list, under [`FacilityUpdate::Append`] they are added to
    /// it. Returns the hotel as stored afterwards.
    pub fn update_facilities(
        &self,
        new_facilities: impl IntoIterator<Item = Facility>,
        hotel_name: &str,
    ) -> DomainResult<Hotel> {
        let mut state = self.write();
        let hotel = state
            .hotels
            .get_mut(hotel_name)
            .ok_or_else(|| DomainError::not_found(format!("hotel {hotel_name}")))?;

        let extra = hotel.extra_facilities(new_facilities);
        debug!(
            hotel = %hotel_name,
            added = extra.len(),
            mode = ?self.config.facility_update,
            "facilities updated"
        );
        match self.config.facility_update {
            FacilityUpdate::Replace => hotel.replace_facilities(extra),
            FacilityUpdate::Append => hotel.append_facilities(extra),
        }
        Ok(hotel.clone())
    }

    pub fn hotel(&self, name: &str) -> Option<Hotel> {
        self.read().hotels.get(name).cloned()
    }

    pub fn hotel_count(&self) -> usize {
        self.read().hotels.len()
    }

    pub fn user(&self, id: AadharNumber) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    pub fn booking(&self, id: &BookingId) -> Option<Booking> {
        self.read().bookings.get(id).cloned()
    }

    /// Bookings made by `user`, oldest first.
    pub fn bookings_for(&self, user: AadharNumber) -> Vec<Booking> {
        let mut bookings: Vec<Booking> = self
            .read()
            .bookings
            .values()
            .filter(|booking| booking.user() == user)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| {
            a.booked_at()
                .cmp(&b.booked_at())
                .then_with(|| a.booking_id().cmp(&b.booking_id()))
        });
        bookings
    }
}
