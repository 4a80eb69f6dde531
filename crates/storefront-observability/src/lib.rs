//! Structured operator logging for the storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging scoped to a component
//! - `LogBuilder` - Fluent construction of entries with fields
//! - `LogSink` - Where rendered entries go (stderr, `tracing`, memory)

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;
