//! Diagnostic sink forwarding to `tracing`.

use convey_core::{DiagnosticSink, Level};

/// A sink that forwards registry diagnostics to `tracing`.
///
/// Without the `tracing` feature the messages are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, level: Level, message: &str) {
        #[cfg(feature = "tracing")]
        {
            match level {
                Level::Trace => tracing::trace!(target: "convey", "{message}"),
                Level::Debug => tracing::debug!(target: "convey", "{message}"),
                Level::Info => tracing::info!(target: "convey", "{message}"),
                Level::Warn => tracing::warn!(target: "convey", "{message}"),
                Level::Error => tracing::error!(target: "convey", "{message}"),
            }
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (level, message); // Suppress unused warning
        }
    }
}
