//! Booking identifier generation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use innkeep_core::BookingId;

/// Source of fresh booking identifiers.
pub trait BookingIdGenerator: Send + Sync {
    fn next_id(&self) -> BookingId;
}

impl<G> BookingIdGenerator for Arc<G>
where
    G: BookingIdGenerator + ?Sized,
{
    fn next_id(&self) -> BookingId {
        (**self).next_id()
    }
}

/// Random (UUIDv4) identifiers. The default for production stores.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomBookingIds;

impl BookingIdGenerator for RandomBookingIds {
    fn next_id(&self) -> BookingId {
        BookingId::random()
    }
}

/// Deterministic identifiers built from a counter, for tests and replays.
///
/// The n-th id is the UUID whose 128-bit value is `start + n`.
#[derive(Debug, Default)]
pub struct SequentialBookingIds {
    next: AtomicU64,
}

impl SequentialBookingIds {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl BookingIdGenerator for SequentialBookingIds {
    fn next_id(&self) -> BookingId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        BookingId::from_uuid(Uuid::from_u128(u128::from(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up_from_start() {
        let ids = SequentialBookingIds::starting_at(7);
        assert_eq!(ids.next_id(), BookingId::from_uuid(Uuid::from_u128(7)));
        assert_eq!(ids.next_id(), BookingId::from_uuid(Uuid::from_u128(8)));
    }

    #[test]
    fn shared_generator_advances_one_counter() {
        let ids = Arc::new(SequentialBookingIds::new());
        let a = Arc::clone(&ids);
        assert_ne!(a.next_id(), ids.next_id());
    }

    #[test]
    fn random_ids_differ() {
        let ids = RandomBookingIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
