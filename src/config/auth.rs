//! Authentication provider descriptor
//!
//! Connection parameters of the Auth0 tenant the front end signs users in
//! with. The flows themselves belong to the consuming application.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{absolute_url, hostname_segment};
use crate::error::Result;

/// Host suffix appended to the tenant's domain prefix
pub const AUTH0_HOST_SUFFIX: &str = "auth0.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthProviderDescriptor {
    #[validate(length(min = 1), custom(function = "hostname_segment"))]
    domain_prefix: String,
    #[validate(length(min = 1))]
    audience: String,
    #[validate(length(min = 1))]
    client_id: String,
    #[validate(length(min = 1), custom(function = "absolute_url"))]
    callback_url: String,
}

impl AuthProviderDescriptor {
    /// Build a validated descriptor
    pub fn new(
        domain_prefix: impl Into<String>,
        audience: impl Into<String>,
        client_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Result<Self> {
        let descriptor = Self::unchecked(
            domain_prefix.into(),
            audience.into(),
            client_id.into(),
            callback_url.into(),
        );
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub(crate) fn unchecked(
        domain_prefix: String,
        audience: String,
        client_id: String,
        callback_url: String,
    ) -> Self {
        Self {
            domain_prefix,
            audience,
            client_id,
            callback_url,
        }
    }

    pub fn domain_prefix(&self) -> &str {
        &self.domain_prefix
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Provider hostname, e.g. `dev-fc34y9lq.us.auth0.com`
    pub fn domain(&self) -> String {
        format!("{}.{}", self.domain_prefix, AUTH0_HOST_SUFFIX)
    }

    /// Token issuer URL of the tenant
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn descriptor() -> AuthProviderDescriptor {
        AuthProviderDescriptor::new(
            "dev-fc34y9lq.us",
            "coffee-api",
            "E7D2nk5Kt6zwraESPmFP12fQIJqtagAb",
            "http://localhost:8100",
        )
        .unwrap()
    }

    #[test]
    fn test_domain_and_issuer() {
        let auth = descriptor();
        assert_eq!(auth.domain(), "dev-fc34y9lq.us.auth0.com");
        assert_eq!(auth.issuer(), "https://dev-fc34y9lq.us.auth0.com/");
    }

    #[test]
    fn test_rejects_empty_fields() {
        let err = AuthProviderDescriptor::new("tenant", "", "client", "http://localhost:8100")
            .unwrap_err();
        match err {
            ConfigError::Invalid(errors) => {
                assert!(errors.to_string().contains("audience"));
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(AuthProviderDescriptor::new("tenant", "api", "", "http://localhost:8100").is_err());
    }

    #[test]
    fn test_rejects_relative_callback() {
        let err = AuthProviderDescriptor::new("tenant", "api", "client", "localhost:8100")
            .unwrap_err();
        match err {
            ConfigError::Invalid(errors) => {
                assert!(errors.to_string().contains("callback"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_domain_prefix_with_scheme() {
        assert!(AuthProviderDescriptor::new(
            "https://tenant.us",
            "api",
            "client",
            "http://localhost:8100"
        )
        .is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(descriptor()).unwrap();
        assert_eq!(json["domainPrefix"], "dev-fc34y9lq.us");
        assert_eq!(json["clientId"], "E7D2nk5Kt6zwraESPmFP12fQIJqtagAb");
        assert_eq!(json["callbackUrl"], "http://localhost:8100");
    }
}
