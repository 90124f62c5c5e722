//! # convey - Type-Pair Mapping Registry
//!
//! `convey` keeps one conversion function per ordered `(destination, source)`
//! type pair and dispatches conversion requests to it by the types named at
//! the call site. Modules register "how to turn an `A` into a `B`" once;
//! callers ask for the conversion without referencing the module that
//! provided it.
//!
//! ## Quick Start
//!
//! ```rust
//! use convey::MapperRegistry;
//!
//! struct PersonEntity { full_name: String }
//! struct PersonDto { name: String }
//!
//! let registry = MapperRegistry::new();
//! registry
//!     .register_fn::<PersonDto, PersonEntity>(|e| PersonDto { name: e.full_name })
//!     .unwrap();
//!
//! let dto: PersonDto = registry
//!     .convert(PersonEntity { full_name: "Ada".into() })
//!     .unwrap();
//! assert_eq!(dto.name, "Ada");
//! ```
//!
//! ## Duplicate Policy
//!
//! A registry is [`DuplicatePolicy::Lenient`] by default: registering a second
//! mapper for an occupied pair keeps the first one and reports the skip only
//! to the attached [`DiagnosticSink`]. Under [`DuplicatePolicy::Strict`] the
//! second registration fails with [`RegistryError::DuplicateMapping`].
//!
//! ## Features
//!
//! - `tracing` (default): structured `tracing` events from the registry
//! - `inventory`: collect mappers submitted from anywhere in the binary
//! - `macros`: the `#[mapper]` attribute (implies `inventory`)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use convey_core::{
    // Extra arguments
    Args,
    // Erased converters
    AnyValue,
    // Error types
    BoxError,
    ConveyError,
    ConvertError,
    // Diagnostics
    DiagnosticSink,
    ErasedConverter,
    FnConverter,
    Level,
    RegistryError,
    // Keys
    TypePairKey,
    TypedConverter,
    // Values
    Value,
    args,
};

// Registry
pub use convey_std::{
    ConvertIter, DuplicatePolicy, MapperRegistry, Registered, RegistryBuilder, TracingSink,
    global,
};

// Distributed registration
#[cfg(feature = "inventory")]
pub use convey_std::{MapperRegistration, inventory};

#[cfg(feature = "macros")]
pub use convey_macros::mapper;

/// Testing utilities.
pub mod testing {
    pub use convey_std::testing::{CallCounter, RecordingSink};
}

/// Prelude module - common imports for Convey.
///
/// # Usage
///
/// ```rust
/// use convey::prelude::*;
///
/// let registry = MapperRegistry::builder().strict().build().unwrap();
/// assert_eq!(registry.policy(), DuplicatePolicy::Strict);
/// ```
pub mod prelude {
    pub use crate::{
        Args, ConvertError, DuplicatePolicy, MapperRegistry, RegistryError, TypePairKey, args,
        global,
    };

    #[cfg(feature = "macros")]
    pub use crate::mapper;
}
