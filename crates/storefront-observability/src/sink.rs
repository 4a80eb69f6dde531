//! Log output sinks.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::logging::{LogEntry, LogFormat, LogLevel};

/// Destination for rendered log entries.
pub trait LogSink: Send + Sync + fmt::Debug {
    /// Write one entry.
    fn write(&self, entry: &LogEntry, format: LogFormat);
}

/// Writes entries to stderr (Spin captures this).
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, entry: &LogEntry, format: LogFormat) {
        eprintln!("{}", entry.render(format));
    }
}

/// Forwards entries to the `tracing` facade.
///
/// Useful when the host process installs a subscriber; the rendered entry
/// becomes the event message and the component becomes a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, entry: &LogEntry, format: LogFormat) {
        let rendered = entry.render(format);
        let component = entry.component.as_str();
        match entry.level {
            LogLevel::Trace => tracing::trace!(component, "{}", rendered),
            LogLevel::Debug => tracing::debug!(component, "{}", rendered),
            LogLevel::Info => tracing::info!(component, "{}", rendered),
            LogLevel::Warn => tracing::warn!(component, "{}", rendered),
            LogLevel::Error => tracing::error!(component, "{}", rendered),
        }
    }
}

/// Keeps entries in memory for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages of the captured entries, in order.
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.message).collect()
    }

    /// Entries at or above a level.
    pub fn at_least(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level >= level)
            .collect()
    }

    /// Drop all captured entries.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl LogSink for MemorySink {
    fn write(&self, entry: &LogEntry, _format: LogFormat) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
    }
}
