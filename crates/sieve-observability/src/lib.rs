//! # sieve-observability
//!
//! Subscriber installation and the span macros used across the workspace.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, spans};
