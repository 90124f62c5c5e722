//! # convey-std
//!
//! Standard registry implementation for Convey.
//!
//! This crate provides:
//! - **Registry**: [`MapperRegistry`] with its [`RegistryBuilder`] and [`DuplicatePolicy`]
//! - **Fan-out**: [`ConvertIter`] and `MapperRegistry::convert_stream`
//! - **Process-wide instance**: [`global()`]
//! - **Sinks**: [`TracingSink`]
//! - **Distributed registration**: `MapperRegistration` (feature `inventory`)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use convey_core;

// Modules
pub mod global;
pub mod registry;
pub mod sinks;
pub mod testing;

pub use global::global;
pub use registry::{ConvertIter, DuplicatePolicy, MapperRegistry, Registered, RegistryBuilder};
pub use sinks::TracingSink;

#[cfg(feature = "inventory")]
pub use inventory;
#[cfg(feature = "inventory")]
pub use registry::collected::MapperRegistration;
