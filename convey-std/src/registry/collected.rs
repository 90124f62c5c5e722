//! Distributed mapper registration via `inventory`.
//!
//! `#[convey::mapper]` submits a [`MapperRegistration`] for each annotated
//! function. A registry picks all of them up with
//! [`MapperRegistry::register_collected`].

use super::{MapperRegistry, Registered};
use convey_core::{ErasedConverter, RegistryError, TypePairKey};
use std::sync::Arc;

/// Registration entry submitted to `inventory`.
///
/// Both fields are plain function pointers so the entry can be built in a
/// `static` context; the key and the converter are produced on collection.
pub struct MapperRegistration {
    /// Produces the key the mapper is registered under.
    pub key: fn() -> TypePairKey,
    /// Produces the type-erased mapper.
    pub build: fn() -> Arc<dyn ErasedConverter>,
}

impl MapperRegistration {
    /// Create a new registration entry.
    pub const fn new(key: fn() -> TypePairKey, build: fn() -> Arc<dyn ErasedConverter>) -> Self {
        Self { key, build }
    }
}

inventory::collect!(MapperRegistration);

/// Iterate over every submitted registration.
pub fn registrations() -> impl Iterator<Item = &'static MapperRegistration> {
    inventory::iter::<MapperRegistration>.into_iter()
}

impl MapperRegistry {
    /// Register every mapper submitted through `#[mapper]`.
    ///
    /// Each entry goes through the normal insertion path, so the duplicate
    /// policy applies. Returns the number of mappers actually inserted.
    pub fn register_collected(&self) -> Result<usize, RegistryError> {
        let mut inserted = 0;
        for registration in registrations() {
            let key = (registration.key)();
            if self.register_shared(key, (registration.build)())? == Registered::Inserted {
                inserted += 1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(inserted, "collected mappers registered");

        Ok(inserted)
    }
}
