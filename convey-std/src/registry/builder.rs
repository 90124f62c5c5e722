//! Builder for constructing a [`MapperRegistry`].

use super::{DuplicatePolicy, MapperRegistry};
use convey_core::{Args, BoxError, DiagnosticSink, RegistryError, Value};
use std::sync::Arc;

type Step = Box<dyn FnOnce(&MapperRegistry) -> Result<(), RegistryError>>;

/// Builder for constructing a [`MapperRegistry`].
///
/// Policy and sink are applied first, then the registrations in the order
/// they were added, so a strict builder fails on the first duplicate.
///
/// # Example
///
/// ```rust
/// use convey_std::registry::{DuplicatePolicy, MapperRegistry};
///
/// let registry = MapperRegistry::builder()
///     .policy(DuplicatePolicy::Strict)
///     .register_fn::<String, u32>(|v| v.to_string())
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.convert::<String, _>(7u32).unwrap(), "7");
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    policy: DuplicatePolicy,
    sink: Option<Arc<dyn DiagnosticSink>>,
    steps: Vec<Step>,
    #[cfg(feature = "inventory")]
    collect_inventory: bool,
}

impl RegistryBuilder {
    /// Create a new builder with the lenient policy and no sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate policy.
    pub fn policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `policy(DuplicatePolicy::Strict)`.
    pub fn strict(self) -> Self {
        self.policy(DuplicatePolicy::Strict)
    }

    /// Attach a diagnostic sink.
    pub fn sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Register a mapper taking the source value and the extra arguments.
    pub fn register<D, S>(self, func: impl Fn(S, &Args) -> D + Send + Sync + 'static) -> Self
    where
        D: Value,
        S: Value,
    {
        self.step(move |registry| registry.register::<D, S>(func).map(drop))
    }

    /// Register a mapper that ignores extra arguments.
    pub fn register_fn<D, S>(self, func: impl Fn(S) -> D + Send + Sync + 'static) -> Self
    where
        D: Value,
        S: Value,
    {
        self.step(move |registry| registry.register_fn::<D, S>(func).map(drop))
    }

    /// Register a mapper that may fail.
    pub fn try_register<D, S, E>(
        self,
        func: impl Fn(S, &Args) -> Result<D, E> + Send + Sync + 'static,
    ) -> Self
    where
        D: Value,
        S: Value,
        E: Into<BoxError> + 'static,
    {
        self.step(move |registry| registry.try_register::<D, S, E>(func).map(drop))
    }

    /// Also register every mapper submitted through `#[mapper]`.
    #[cfg(feature = "inventory")]
    pub fn collect_inventory(mut self) -> Self {
        self.collect_inventory = true;
        self
    }

    fn step(
        mut self,
        step: impl FnOnce(&MapperRegistry) -> Result<(), RegistryError> + 'static,
    ) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Build the registry.
    pub fn build(self) -> Result<MapperRegistry, RegistryError> {
        let registry = MapperRegistry::with_policy(self.policy);
        if let Some(sink) = self.sink {
            registry.set_shared_sink(sink);
        }
        for step in self.steps {
            step(&registry)?;
        }
        #[cfg(feature = "inventory")]
        {
            if self.collect_inventory {
                registry.register_collected()?;
            }
        }
        Ok(registry)
    }
}
