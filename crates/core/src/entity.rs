//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same record when their ids match, regardless of how
/// their other fields have drifted (a product keeps its identity while its
/// stock level changes).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison (as opposed to field-by-field equality).
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
