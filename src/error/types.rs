//! Configuration error types

use thiserror::Error;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No configuration declared for variant '{variant}'")]
    ConfigurationNotFound { variant: String },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("Invalid endpoint path '{path}': {reason}")]
    InvalidEndpoint { path: String, reason: String },

    #[error("Malformed configuration document: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn not_found<S: Into<String>>(variant: S) -> Self {
        Self::ConfigurationNotFound {
            variant: variant.into(),
        }
    }

    pub fn invalid_endpoint<P: Into<String>, R: ToString>(path: P, reason: R) -> Self {
        Self::InvalidEndpoint {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error means the variant simply has no declaration
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigurationNotFound { .. })
    }
}
