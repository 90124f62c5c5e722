//! Error types for Convey.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ConveyError`] - Top-level error type for all Convey operations
//! - [`RegistryError`] - Errors while registering mappers
//! - [`ConvertError`] - Errors while looking up or invoking a mapper

use crate::key::TypePairKey;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Convey operations.
#[derive(Error, Debug)]
pub enum ConveyError {
    /// An error occurred while registering a mapper.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// An error occurred while converting a value.
    #[error("convert error: {0}")]
    Convert(#[from] ConvertError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while registering a mapper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A mapper is already registered for this type pair and the registry
    /// runs under the strict duplicate policy.
    #[error("a mapper already exists between the types: {0}")]
    DuplicateMapping(TypePairKey),
}

/// Errors that can occur while converting a value.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// No mapper is registered for the requested type pair.
    #[error("no mapper registered for {0}")]
    NoMapperFound(TypePairKey),

    /// The mapper produced a value whose type is not the destination type.
    #[error("converted object is not of expected type: `{}`", .key.destination_name())]
    WrongResultType {
        /// The pair whose mapper misbehaved.
        key: TypePairKey,
    },

    /// An erased mapper was handed a value of the wrong source type.
    #[error("mapper expected a source value of type `{expected}`")]
    WrongSourceType {
        /// The source type the mapper expected.
        expected: &'static str,
    },

    /// A mapper asked for an extra argument that was absent or of another type.
    #[error("missing extra argument #{index} of type `{expected}`")]
    MissingArgument {
        /// Position in the extra argument list.
        index: usize,
        /// The type the mapper asked for.
        expected: &'static str,
    },

    /// The mapper itself failed.
    #[error("mapper failed")]
    Failed(#[source] BoxError),
}

impl ConvertError {
    /// Wraps a mapper failure.
    ///
    /// Argument and source-type errors raised by the mapper pass through
    /// unchanged. Errors from a nested lookup stay wrapped in
    /// [`ConvertError::Failed`], so [`NoMapperFound`](ConvertError::NoMapperFound)
    /// always refers to the pair the caller asked for.
    pub fn from_mapper(err: BoxError) -> Self {
        match err.downcast::<ConvertError>() {
            Ok(inner) => match *inner {
                passthrough @ (ConvertError::MissingArgument { .. }
                | ConvertError::WrongSourceType { .. }) => passthrough,
                nested => ConvertError::Failed(Box::new(nested)),
            },
            Err(other) => ConvertError::Failed(other),
        }
    }

    /// Returns `true` if this is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConvertError::NoMapperFound(_))
    }
}

// Convenience conversions
impl From<BoxError> for ConveyError {
    fn from(err: BoxError) -> Self {
        ConveyError::Custom(err)
    }
}

impl From<BoxError> for ConvertError {
    fn from(err: BoxError) -> Self {
        ConvertError::from_mapper(err)
    }
}
