//! Entity identifiers.

use std::fmt;

/// Identifier for an entity within its owning system.
///
/// Identifiers are allocated by an entity store starting at 1 and increase
/// monotonically. An identifier is never reused within one store's lifetime,
/// so a held `EntityId` either resolves to the same entity it always did or
/// to nothing at all. Identifiers are only unique per store; two systems may
/// each own an entity 1.
///
/// "No entity" is represented as `Option<EntityId>`, not a sentinel value.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates an entity ID from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity {}", self.0)
    }
}
