//! Build log seam.
//!
//! Deprecation notices, configuration-shape errors and debug dumps are
//! user-facing build output, so they go through [`Logger`] rather than
//! straight to `tracing`. Production code uses [`TracingLogger`]; tests inject
//! `MemoryLogger` (behind the `mock` feature) and assert on what was logged.

/// Sink for user-facing build messages.
pub trait Logger: Send + Sync {
    /// Informational message.
    fn info(&self, message: &str);
    /// Warning, e.g. deprecated usage.
    fn warn(&self, message: &str);
    /// Recoverable error, e.g. malformed configuration.
    fn error(&self, message: &str);
}

/// [`Logger`] forwarding to `tracing` under the `hope` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "hope", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "hope", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "hope", "{message}");
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
