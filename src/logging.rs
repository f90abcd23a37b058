// Logging capability handed to each mapping component
//
// Components never reach for a global logger; they receive a `&dyn Logger`.
// The CLI wires in `TracingLogger`, tests use `MemoryLogger`.

use std::cell::RefCell;
use tracing_subscriber::EnvFilter;

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Sink for mapper diagnostics
pub trait Logger {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Forwards every entry to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }
}

/// Keeps entries in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: RefCell<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    /// Messages logged at the given level, in order
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }
}

/// Install the global `tracing` subscriber used by the CLI.
///
/// `RUST_LOG` wins over the `debug` flag when it is set. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init(debug: bool, color: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_records_levels() {
        let logger = MemoryLogger::new();
        logger.info("scan started");
        logger.warn("missing id");
        logger.error("cannot open");
        logger.debug("visiting node");

        let entries = logger.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], (Level::Info, "scan started".to_string()));
        assert_eq!(logger.messages(Level::Warn), vec!["missing id".to_string()]);
        assert_eq!(logger.messages(Level::Error), vec!["cannot open".to_string()]);
    }

    #[test]
    fn test_logger_as_trait_object() {
        let logger = MemoryLogger::new();
        let dyn_logger: &dyn Logger = &logger;
        dyn_logger.debug("through a trait object");
        assert_eq!(logger.messages(Level::Debug).len(), 1);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false, false);
        init(true, false);
        TracingLogger.info("after init");
    }
}
