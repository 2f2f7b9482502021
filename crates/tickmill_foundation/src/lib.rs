//! Core identifiers and error types for Tickmill.
//!
//! This crate provides:
//! - [`EntityId`] - Per-system monotonic entity identifiers
//! - [`Error`] - The error type shared by all Tickmill operations
//! - [`Result`] - Result alias over [`Error`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod entity;
mod error;

pub use entity::EntityId;
pub use error::{Error, Result};
