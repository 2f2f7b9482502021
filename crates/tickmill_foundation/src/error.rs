//! Error types for the Tickmill runtime.
//!
//! Uses `thiserror` for ergonomic error definition. Absence is never an
//! error in Tickmill: lookups return `Option` and removals return `bool`.
//! The variants here cover the remaining negative outcomes, all of which
//! are recoverable by the caller.

use thiserror::Error;

use crate::entity::EntityId;

/// Result alias for Tickmill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for Tickmill operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A component of this concrete type is already attached to the entity.
    ///
    /// The previously attached component is left unmodified.
    #[error("component {component} already attached to {entity}")]
    ComponentAlreadyAttached {
        /// The entity that was targeted.
        entity: EntityId,
        /// Type name of the duplicate component.
        component: &'static str,
    },

    /// A system of this concrete type is already registered with the world.
    ///
    /// The previously registered system is left unmodified.
    #[error("system {system} already registered")]
    SystemAlreadyRegistered {
        /// Type name of the duplicate system.
        system: &'static str,
    },

    /// A system's `initialize` hook reported failure during world startup.
    ///
    /// Systems initialized before the failing one are left in place.
    #[error("system {system} failed to initialize")]
    SystemInitFailed {
        /// Type name of the failing system.
        system: &'static str,
    },
}

impl Error {
    /// Creates a duplicate-component error.
    #[must_use]
    pub fn component_already_attached(entity: EntityId, component: &'static str) -> Self {
        Self::ComponentAlreadyAttached { entity, component }
    }

    /// Creates a duplicate-system error.
    #[must_use]
    pub fn system_already_registered(system: &'static str) -> Self {
        Self::SystemAlreadyRegistered { system }
    }

    /// Creates an initialization-failure error.
    #[must_use]
    pub fn system_init_failed(system: &'static str) -> Self {
        Self::SystemInitFailed { system }
    }
}
