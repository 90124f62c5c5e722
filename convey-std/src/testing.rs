//! Testing utilities for Convey.
//!
//! - [`RecordingSink`]: A diagnostic sink that records every message it receives
//! - [`CallCounter`]: A shared counter for checking how often a mapper ran

use convey_core::{DiagnosticSink, Level};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Sink
// ============================================================================

/// A sink that records all messages it receives.
///
/// Clones share the same record, so keep one clone and hand the other to the
/// registry.
///
/// # Example
///
/// ```rust
/// use convey_std::{registry::MapperRegistry, testing::RecordingSink};
///
/// let sink = RecordingSink::new();
/// let registry = MapperRegistry::new();
/// registry.set_sink(sink.clone());
///
/// let _ = registry.convert::<String, _>(1u8);
/// assert_eq!(sink.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingSink {
    /// Create a new, empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded messages.
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Get the number of recorded messages.
    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Get the number of recorded messages at exactly `level`.
    pub fn count_at(&self, level: Level) -> usize {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    /// Clear all recorded messages.
    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn log(&self, level: Level, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_owned()));
    }
}

// ============================================================================
// Call Counter
// ============================================================================

/// A cloneable counter for mapper invocations.
///
/// # Example
///
/// ```rust
/// use convey_std::{registry::MapperRegistry, testing::CallCounter};
///
/// let counter = CallCounter::new();
/// let registry = MapperRegistry::new();
/// registry
///     .register_fn::<u16, u8>(counter.counting(|v: u8| u16::from(v)))
///     .unwrap();
///
/// registry.convert::<u16, _>(1u8).unwrap();
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct CallCounter {
    count: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Create a new counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn tick(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }

    /// Wrap a single-argument mapper so each call is counted.
    pub fn counting<S, D, F>(&self, func: F) -> impl Fn(S) -> D + Send + Sync + 'static
    where
        F: Fn(S) -> D + Send + Sync + 'static,
    {
        let counter = self.clone();
        move |value| {
            counter.tick();
            func(value)
        }
    }
}
