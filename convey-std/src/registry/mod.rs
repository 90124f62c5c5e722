//! The mapping registry.
//!
//! A [`MapperRegistry`] holds at most one mapper per ordered
//! `(destination, source)` type pair and dispatches conversion requests to it.
//!
//! # Example
//!
//! ```rust
//! use convey_std::registry::MapperRegistry;
//!
//! struct PersonEntity { full_name: String }
//! #[derive(Debug, PartialEq)]
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
//! assert_eq!(dto, PersonDto { name: "Ada".into() });
//! ```

mod builder;
#[cfg(feature = "inventory")]
pub mod collected;
mod sequence;

pub use builder::RegistryBuilder;
pub use sequence::ConvertIter;

use convey_core::{
    Args, BoxError, ConvertError, DiagnosticSink, ErasedConverter, Level, RegistryError,
    TypePairKey, TypedConverter, Value,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

/// What to do when a mapper is registered for a pair that already has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the existing mapper and drop the new one without an error.
    #[default]
    Lenient,
    /// Reject the registration with [`RegistryError::DuplicateMapping`].
    Strict,
}

/// Outcome of a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registered {
    /// The mapper was inserted.
    Inserted,
    /// A mapper already existed and was kept; the new one was dropped.
    KeptExisting,
}

type Entry = Arc<dyn ErasedConverter>;

struct Table {
    mappers: HashMap<TypePairKey, Entry>,
    policy: DuplicatePolicy,
}

/// A thread-safe table of mappers keyed by [`TypePairKey`].
///
/// Registration and removal take the write lock. Conversion holds the read
/// lock only long enough to clone the mapper out, so mappers run unlocked and
/// may themselves call back into the registry.
pub struct MapperRegistry {
    table: RwLock<Table>,
    sink: RwLock<Option<Arc<dyn DiagnosticSink>>>,
}

impl Default for MapperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MapperRegistry {
    /// Create an empty registry with the lenient duplicate policy.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Create an empty registry with the given duplicate policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            table: RwLock::new(Table {
                mappers: HashMap::new(),
                policy,
            }),
            sink: RwLock::new(None),
        }
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The current duplicate policy.
    pub fn policy(&self) -> DuplicatePolicy {
        self.table.read().policy
    }

    /// Change the duplicate policy. Applies to subsequent registrations.
    pub fn set_policy(&self, policy: DuplicatePolicy) {
        self.table.write().policy = policy;

        #[cfg(feature = "tracing")]
        tracing::debug!(?policy, "duplicate policy changed");
    }

    /// Attach a diagnostic sink, replacing any previous one.
    pub fn set_sink(&self, sink: impl DiagnosticSink + 'static) {
        *self.sink.write() = Some(Arc::new(sink));
    }

    /// Attach an already shared diagnostic sink.
    pub fn set_shared_sink(&self, sink: Arc<dyn DiagnosticSink>) {
        *self.sink.write() = Some(sink);
    }

    /// Detach the diagnostic sink.
    pub fn clear_sink(&self) {
        *self.sink.write() = None;
    }

    fn diagnose(&self, level: Level, message: impl FnOnce() -> String) {
        let sink = self.sink.read().clone();
        if let Some(sink) = sink {
            sink.log(level, &message());
        }
    }

    /// Register a mapper taking the source value and the extra arguments.
    pub fn register<D, S>(
        &self,
        func: impl Fn(S, &Args) -> D + Send + Sync + 'static,
    ) -> Result<Registered, RegistryError>
    where
        D: Value,
        S: Value,
    {
        self.try_register::<D, S, Infallible>(move |value, args| Ok(func(value, args)))
    }

    /// Register a mapper that ignores extra arguments.
    pub fn register_fn<D, S>(
        &self,
        func: impl Fn(S) -> D + Send + Sync + 'static,
    ) -> Result<Registered, RegistryError>
    where
        D: Value,
        S: Value,
    {
        self.register::<D, S>(move |value, _args| func(value))
    }

    /// Register a mapper that may fail.
    ///
    /// The mapper's error reaches the caller of [`convert`](Self::convert) as
    /// [`ConvertError::Failed`], or unchanged if it already is a [`ConvertError`].
    pub fn try_register<D, S, E>(
        &self,
        func: impl Fn(S, &Args) -> Result<D, E> + Send + Sync + 'static,
    ) -> Result<Registered, RegistryError>
    where
        D: Value,
        S: Value,
        E: Into<BoxError> + 'static,
    {
        self.insert(
            TypePairKey::of::<D, S>(),
            Arc::new(TypedConverter::<D, S, _, E>::new(func)),
        )
    }

    /// Register a type-erased converter under an explicit key.
    ///
    /// The registry cannot check what the converter returns. If it produces
    /// something other than the key's destination type, conversion fails
    /// with [`ConvertError::WrongResultType`].
    pub fn register_erased(
        &self,
        key: TypePairKey,
        converter: impl ErasedConverter + 'static,
    ) -> Result<Registered, RegistryError> {
        self.insert(key, Arc::new(converter))
    }

    /// Register an already shared type-erased converter.
    pub fn register_shared(
        &self,
        key: TypePairKey,
        converter: Arc<dyn ErasedConverter>,
    ) -> Result<Registered, RegistryError> {
        self.insert(key, converter)
    }

    fn insert(&self, key: TypePairKey, entry: Entry) -> Result<Registered, RegistryError> {
        let policy = {
            let mut table = self.table.write();
            if !table.mappers.contains_key(&key) {
                table.mappers.insert(key, entry);

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    from = key.source_name(),
                    to = key.destination_name(),
                    "mapper registered"
                );

                return Ok(Registered::Inserted);
            }
            table.policy
        };

        match policy {
            DuplicatePolicy::Strict => Err(RegistryError::DuplicateMapping(key)),
            DuplicatePolicy::Lenient => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    from = key.source_name(),
                    to = key.destination_name(),
                    "duplicate mapper ignored"
                );

                self.diagnose(Level::Warn, || {
                    format!("mapper for {key} already registered; keeping the existing one")
                });
                Ok(Registered::KeptExisting)
            }
        }
    }

    /// Remove the mapper converting `S` into `D`.
    ///
    /// Returns whether a mapper was removed. Removing an absent pair is a no-op.
    pub fn remove<D: 'static, S: 'static>(&self) -> bool {
        self.remove_key(&TypePairKey::of::<D, S>())
    }

    /// Remove the mapper registered under `key`.
    pub fn remove_key(&self, key: &TypePairKey) -> bool {
        let removed = self.table.write().mappers.remove(key).is_some();

        #[cfg(feature = "tracing")]
        {
            if removed {
                tracing::debug!(
                    from = key.source_name(),
                    to = key.destination_name(),
                    "mapper removed"
                );
            }
        }

        removed
    }

    /// Whether a mapper converting `S` into `D` is registered.
    pub fn contains<D: 'static, S: 'static>(&self) -> bool {
        self.contains_key(&TypePairKey::of::<D, S>())
    }

    /// Whether a mapper is registered under `key`.
    pub fn contains_key(&self, key: &TypePairKey) -> bool {
        self.table.read().mappers.contains_key(key)
    }

    /// Number of registered mappers.
    pub fn len(&self) -> usize {
        self.table.read().mappers.len()
    }

    /// Whether no mapper is registered.
    pub fn is_empty(&self) -> bool {
        self.table.read().mappers.is_empty()
    }

    /// Snapshot of the registered keys, in no particular order.
    pub fn keys(&self) -> Vec<TypePairKey> {
        self.table.read().mappers.keys().copied().collect()
    }

    /// Convert `value` into a `D` with no extra arguments.
    pub fn convert<D: Value, S: Value>(&self, value: S) -> Result<D, ConvertError> {
        self.convert_with::<D, S>(value, &Args::new())
    }

    /// Convert `value` into a `D`, handing `args` to the mapper.
    pub fn convert_with<D: Value, S: Value>(
        &self,
        value: S,
        args: &Args,
    ) -> Result<D, ConvertError> {
        let key = TypePairKey::of::<D, S>();
        let entry = self.table.read().mappers.get(&key).cloned();

        let Some(mapper) = entry else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                from = key.source_name(),
                to = key.destination_name(),
                "no mapper registered"
            );

            self.diagnose(Level::Debug, || format!("no mapper registered for {key}"));
            return Err(ConvertError::NoMapperFound(key));
        };

        let converted = mapper.convert_erased(Box::new(value), args)?;
        converted
            .downcast::<D>()
            .map(|boxed| *boxed)
            .map_err(|_| ConvertError::WrongResultType { key })
    }

    /// Lazily convert every element of `values`, in order.
    ///
    /// The iterator stops after yielding the first error; later elements are
    /// neither pulled from `values` nor converted.
    pub fn convert_all<D, S, I>(&self, values: I) -> ConvertIter<'_, D, S, I::IntoIter>
    where
        D: Value,
        S: Value,
        I: IntoIterator<Item = S>,
    {
        ConvertIter::new(self, values.into_iter())
    }
}

impl std::fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = self.table.read();
        f.debug_struct("MapperRegistry")
            .field("policy", &table.policy)
            .field("keys", &table.mappers.keys().collect::<Vec<_>>())
            .finish()
    }
}
