//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every store operation that can fail reports one of these. Legacy sentinel
/// values ("FAILURE", `-1`) are derived from them only at the compatibility
/// boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. missing hotel name, zero rooms).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A record with the same key already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The hotel cannot satisfy the requested number of rooms.
    #[error("hotel {hotel} has {available} rooms available, {requested} requested")]
    InsufficientRooms {
        hotel: String,
        requested: u32,
        available: u32,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn insufficient_rooms(hotel: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientRooms {
            hotel: hotel.into(),
            requested,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_rooms_message_names_hotel_and_counts() {
        let err = DomainError::insufficient_rooms("Taj", 5, 2);
        assert_eq!(err.to_string(), "hotel Taj has 2 rooms available, 5 requested");
    }

    #[test]
    fn constructors_map_to_variants() {
        assert_eq!(DomainError::not_found("hotel x"), DomainError::NotFound("hotel x".into()));
        match DomainError::conflict("dup") {
            DomainError::Conflict(msg) => assert_eq!(msg, "dup"),
            _ => panic!("Expected Conflict"),
        }
    }
}
