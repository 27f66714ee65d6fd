//! Entity trait: a record whose identity is its primary key in the store.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Primary key of the entity.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the key the entity is stored under.
    fn id(&self) -> &Self::Id;
}
