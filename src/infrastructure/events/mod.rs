//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - TracingEventSink: log lines for humans
//! - JsonEventSink: NDJSON output for CI/automation

mod json;
mod logging;

pub use json::JsonEventSink;
pub use logging::TracingEventSink;
