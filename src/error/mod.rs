//! Error types
//!
//! Failures the configuration surface can report to its consumer.

mod types;

pub use types::{ConfigError, Result};
