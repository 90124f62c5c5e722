//! Diagnostic sink for registry observations.
//!
//! The registry reports things a caller would otherwise not see, such as a
//! registration skipped under the lenient duplicate policy. Sinks are pure
//! observers: nothing they do changes what the registry returns.

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Very verbose detail.
    Trace,
    /// Lookup misses and similar expected events.
    Debug,
    /// Informational.
    Info,
    /// Something a caller probably wants to know about.
    Warn,
    /// Something went wrong.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Anything that accepts leveled messages.
pub trait DiagnosticSink: Send + Sync {
    /// Record one message.
    fn log(&self, level: Level, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(Level, &str) + Send + Sync,
{
    fn log(&self, level: Level, message: &str) {
        self(level, message)
    }
}
