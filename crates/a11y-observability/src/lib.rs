//! # a11y-observability
//!
//! Subscriber installation and the structured events emitted over a job's life.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_json};
