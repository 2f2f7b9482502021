//! Entities, components, systems, and world orchestration for Tickmill.
//!
//! This crate provides:
//! - [`Component`] - Marker trait for attachable data payloads
//! - [`Entity`] - An identity plus at most one component per concrete type
//! - [`EntityStore`] - Per-system entity ownership and identity allocation
//! - [`System`] - The per-tick behavior contract
//! - [`World`] - Top-level system registry and lifecycle sequencing
//!
//! Execution is strictly single-threaded and synchronous: the host calls
//! [`World::tick`] with an elapsed time, the world broadcasts it to every
//! registered system, and each system walks its own entities. Ownership is
//! tree-shaped throughout (world owns systems, systems own entities,
//! entities own components); anything that crosses the tree is a plain
//! [`EntityId`](tickmill_foundation::EntityId) re-resolved at point of use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod component;
mod entity;
mod system;
mod world;

pub use component::Component;
pub use entity::Entity;
pub use system::{EntityStore, System};
pub use world::World;
