//! The process-wide registry.
//!
//! Most code should construct its own [`MapperRegistry`] and pass it around.
//! This instance exists for applications that want one shared table without
//! threading a handle through every module.

use crate::registry::MapperRegistry;
use once_cell::sync::Lazy;

static GLOBAL: Lazy<MapperRegistry> = Lazy::new(|| {
    let registry = MapperRegistry::new();

    #[cfg(feature = "inventory")]
    {
        if let Err(err) = registry.register_collected() {
            #[cfg(feature = "tracing")]
            tracing::warn!(%err, "failed to seed the global registry");

            #[cfg(not(feature = "tracing"))]
            drop(err);
        }
    }

    registry
});

/// The process-wide registry.
///
/// Created empty and lenient on first access. With the `inventory` feature it
/// is seeded with every `#[mapper]` registration at that point.
pub fn global() -> &'static MapperRegistry {
    &GLOBAL
}
