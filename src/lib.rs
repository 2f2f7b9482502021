//! Tickmill - A minimal tick-driven entity-component-system runtime
//!
//! This crate re-exports the Tickmill layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tickmill_ecs        — Entities, components, systems, world
//! Layer 0: tickmill_foundation — Core types (EntityId, Error)
//! ```

pub use tickmill_ecs as ecs;
pub use tickmill_foundation as foundation;
