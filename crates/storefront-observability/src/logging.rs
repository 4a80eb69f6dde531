//! Structured logging with component context.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::sink::{LogSink, StderrSink};

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Component that produced the entry.
    pub component: String,
    /// Route the component was rendered under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}: {}", self.level, self.component, self.message);

        if let Some(route) = &self.route {
            s.push_str(&format!(" ({})", route));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    /// Render in the given format.
    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Json => self.to_json(),
            LogFormat::Human => self.to_human(),
        }
    }

    /// Get a field value.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Structured logger scoped to a UI component.
///
/// Cloning is cheap; clones share the same sink.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    component: String,
    route: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
    sink: Arc<dyn LogSink>,
}

impl StructuredLogger {
    /// Create a new logger for a component, writing to stderr.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            route: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: Arc::new(StderrSink),
        }
    }

    /// Set the route path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output sink.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Derive a logger for a child component sharing this logger's sink and settings.
    pub fn child(&self, component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            ..self.clone()
        }
    }

    /// Log at trace level.
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message, BTreeMap::new());
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            component: self.component.clone(),
            route: self.route.clone(),
            fields,
        };

        self.sink.write(&entry, self.format);
    }

    /// Get the component name.
    pub fn component(&self) -> &str {
        &self.component
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a duration field (in milliseconds).
    pub fn duration_ms(mut self, key: &str, duration: std::time::Duration) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(duration.as_millis() as u64));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn capture(min_level: LogLevel) -> (StructuredLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new("CatalogPage")
            .with_route("/")
            .with_min_level(min_level)
            .with_sink(Arc::new(sink.clone()));
        (logger, sink)
    }

    #[test]
    fn test_builder_fields_reach_sink() {
        let (logger, sink) = capture(LogLevel::Info);

        logger
            .error_builder("Catalog fetch failed")
            .field("error", "HTTP 500")
            .field_i64("attempt", 1)
            .field_bool("retrying", false)
            .emit();

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.component, "CatalogPage");
        assert_eq!(entry.field("error"), Some(&serde_json::json!("HTTP 500")));
        assert_eq!(entry.field("attempt"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn test_min_level_filters() {
        let (logger, sink) = capture(LogLevel::Warn);
        logger.debug("hidden");
        logger.info("hidden");
        logger.warn("shown");
        assert_eq!(sink.messages(), vec!["shown".to_string()]);
    }

    #[test]
    fn test_child_shares_sink() {
        let (logger, sink) = capture(LogLevel::Info);
        logger.child("CategoryStrip").info("loaded");

        let entries = sink.entries();
        assert_eq!(entries[0].component, "CategoryStrip");
        assert_eq!(entries[0].route.as_deref(), Some("/"));
    }

    #[test]
    fn test_human_format() {
        let mut fields = BTreeMap::new();
        fields.insert("count".to_string(), serde_json::json!(3));
        let entry = LogEntry {
            level: LogLevel::Info,
            message: "Catalog loaded".to_string(),
            component: "CatalogPage".to_string(),
            route: None,
            fields,
        };
        assert_eq!(entry.to_human(), "[INFO] CatalogPage: Catalog loaded | count=3");
    }

    #[test]
    fn test_json_format_flattens_fields() {
        let mut fields = BTreeMap::new();
        fields.insert("count".to_string(), serde_json::json!(3));
        let entry = LogEntry {
            level: LogLevel::Warn,
            message: "m".to_string(),
            component: "c".to_string(),
            route: None,
            fields,
        };
        let value: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(value["level"], "warn");
        assert_eq!(value["count"], 3);
        assert!(value.get("route").is_none());
    }
}
