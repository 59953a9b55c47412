//! Coffee shop configuration library

// Public modules
pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AuthProviderDescriptor, ConfigurationRecord, Variant};
pub use error::{ConfigError, Result};
