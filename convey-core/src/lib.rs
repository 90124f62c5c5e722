//! # convey-core
//!
//! Core types for the Convey type-pair mapping registry.
//!
//! This crate has minimal dependencies and is meant to be imported by crates
//! that only define mappers or sinks and don't need the registry itself.
//!
//! # Building Blocks
//!
//! - [`TypePairKey`]: the ordered `(destination, source)` identity a mapper
//!   is registered under.
//! - [`Value`]: marker for types that can travel through the registry.
//! - [`Args`]: the ordered list of untyped extra arguments a mapper receives.
//! - [`ErasedConverter`]: the object-safe seam every mapper is stored behind,
//!   with [`TypedConverter`] and [`FnConverter`] as adapters.
//! - [`DiagnosticSink`]: the leveled-message capability the registry reports to.
//!
//! # Error Types
//!
//! - [`ConveyError`] - Top-level error type
//! - [`RegistryError`] - Registration errors
//! - [`ConvertError`] - Lookup and invocation errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod args;
mod converter;
mod error;
mod key;
mod sink;
mod value;

// Re-exports
pub use args::Args;
pub use converter::{AnyValue, ErasedConverter, FnConverter, TypedConverter};
pub use error::{BoxError, ConveyError, ConvertError, RegistryError};
pub use key::TypePairKey;
pub use sink::{DiagnosticSink, Level};
pub use value::Value;
