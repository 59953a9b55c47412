//! The configuration record
//!
//! A `ConfigurationRecord` is built once from the declaration of a variant,
//! validated, and then only ever read. Consumers receive it by value or behind
//! an `Arc`; there is no process-wide instance.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;
use validator::Validate;

use super::auth::AuthProviderDescriptor;
use super::declarations::{declared, Declaration};
use super::rules::absolute_url;
use super::variant::Variant;
use crate::error::{ConfigError, Result};

/// Environment-scoped, immutable application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", try_from = "RecordDocument")]
pub struct ConfigurationRecord {
    production_mode: bool,
    #[validate(length(min = 1), custom(function = "absolute_url"))]
    api_server_url: String,
    #[validate(nested)]
    auth_provider: AuthProviderDescriptor,
}

/// Wire form accepted when reading a record from JSON
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RecordDocument {
    production_mode: bool,
    api_server_url: String,
    auth_provider: AuthProviderDescriptor,
}

impl TryFrom<RecordDocument> for ConfigurationRecord {
    type Error = ConfigError;

    fn try_from(document: RecordDocument) -> Result<Self> {
        Self::new(
            document.production_mode,
            document.api_server_url,
            document.auth_provider,
        )
    }
}

impl ConfigurationRecord {
    /// Build a validated record from explicit values
    pub fn new(
        production_mode: bool,
        api_server_url: impl Into<String>,
        auth_provider: AuthProviderDescriptor,
    ) -> Result<Self> {
        let record = Self {
            production_mode,
            api_server_url: api_server_url.into(),
            auth_provider,
        };
        record.validate()?;
        Ok(record)
    }

    /// Load the record declared for `variant`
    pub fn load(variant: Variant) -> Result<Self> {
        let declaration =
            declared(variant).ok_or_else(|| ConfigError::not_found(variant.as_str()))?;
        let record = Self::from_declaration(declaration)?;

        tracing::debug!(
            variant = %variant,
            api_server_url = %record.api_server_url,
            auth_domain = %record.auth_provider.domain(),
            "Loaded configuration record"
        );

        Ok(record)
    }

    /// Load a variant by name; unknown names are `ConfigurationNotFound`
    pub fn load_named(name: &str) -> Result<Self> {
        Self::load(name.parse()?)
    }

    /// Load the variant this build selected
    pub fn selected() -> Result<Self> {
        Self::load(Variant::selected())
    }

    /// Parse and validate a record from its JSON document form
    pub fn from_json(text: &str) -> Result<Self> {
        let document: RecordDocument = serde_json::from_str(text)?;
        Self::try_from(document)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    fn from_declaration(declaration: Declaration) -> Result<Self> {
        // Validated once, as part of the whole record
        let auth_provider = AuthProviderDescriptor::unchecked(
            declaration.domain_prefix.to_string(),
            declaration.audience.to_string(),
            declaration.client_id.to_string(),
            declaration.callback_url.to_string(),
        );
        Self::new(
            declaration.production_mode,
            declaration.api_server_url,
            auth_provider,
        )
    }

    pub fn production_mode(&self) -> bool {
        self.production_mode
    }

    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth_provider(&self) -> &AuthProviderDescriptor {
        &self.auth_provider
    }

    /// Default diagnostic verbosity for this record
    pub fn log_level(&self) -> &'static str {
        crate::logging::default_log_level(self.production_mode)
    }

    /// Resolve a route path against the API server base URL
    ///
    /// The leading `/` is optional and any base path is kept, so
    /// `endpoint("drinks/7")` on `https://host/v1` gives `https://host/v1/drinks/7`.
    /// Paths that would leave the API server's origin are rejected.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base =
            Url::parse(&self.api_server_url).map_err(|e| ConfigError::invalid_endpoint(path, e))?;

        // Url::join replaces the last segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }

        let joined = base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ConfigError::invalid_endpoint(path, e))?;

        if joined.origin() != base.origin() {
            return Err(ConfigError::invalid_endpoint(
                path,
                "leaves the API server origin",
            ));
        }

        Ok(joined)
    }
}

impl fmt::Display for ConfigurationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "production mode : {}", self.production_mode)?;
        writeln!(f, "API server      : {}", self.api_server_url)?;
        writeln!(f, "auth domain     : {}", self.auth_provider.domain())?;
        writeln!(f, "audience        : {}", self.auth_provider.audience())?;
        writeln!(f, "client id       : {}", self.auth_provider.client_id())?;
        write!(f, "callback URL    : {}", self.auth_provider.callback_url())
    }
}
