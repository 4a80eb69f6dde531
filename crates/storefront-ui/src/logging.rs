//! Browser console as the operator channel.

use leptos::logging;
use storefront_observability::{LogEntry, LogFormat, LogLevel, LogSink};

/// Writes log entries through `leptos::logging`.
///
/// In the browser this is the devtools console; on the server it falls
/// back to stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry, format: LogFormat) {
        let line = entry.render(format);
        match entry.level {
            LogLevel::Error => logging::error!("{}", line),
            LogLevel::Warn => logging::warn!("{}", line),
            _ => logging::log!("{}", line),
        }
    }
}
