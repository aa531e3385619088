//! Observability setup for labchat: tracing subscriber and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
