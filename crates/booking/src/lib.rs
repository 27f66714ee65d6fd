//! Hotel booking store.
//!
//! This crate keeps hotels, users and bookings in memory and answers the
//! registration, booking and facility queries against them. Callers that need
//! the legacy status strings and sentinel amounts go through [`compat`].

pub mod booking;
pub mod compat;
pub mod config;
pub mod facility;
pub mod hotel;
pub mod id_gen;
pub mod store;
pub mod user;

pub use booking::{Booking, BookingRequest};
pub use config::{FacilityUpdate, RoomAccounting, StoreConfig};
pub use facility::Facility;
pub use hotel::Hotel;
pub use id_gen::{BookingIdGenerator, RandomBookingIds, SequentialBookingIds};
pub use innkeep_core::{BookingId, DomainError, DomainResult};
pub use store::BookingStore;
pub use user::{AadharNumber, User};
