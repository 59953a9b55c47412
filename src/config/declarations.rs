//! Compile-time variant declarations
//!
//! The development record is declared here. Production values are injected
//! by `build.rs` from the build environment (or `.env.production`) and are
//! absent unless the build supplied them.

use super::labels::is_hostname_segment;
use super::variant::Variant;

/// Raw, build-time values of one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Declaration {
    pub production_mode: bool,
    pub api_server_url: &'static str,
    pub domain_prefix: &'static str,
    pub audience: &'static str,
    pub client_id: &'static str,
    pub callback_url: &'static str,
}

impl Declaration {
    const fn is_complete(&self) -> bool {
        !self.api_server_url.is_empty()
            && !self.domain_prefix.is_empty()
            && !self.audience.is_empty()
            && !self.client_id.is_empty()
            && !self.callback_url.is_empty()
    }
}

pub(crate) const DEVELOPMENT: Declaration = Declaration {
    production_mode: false,
    // Local API server
    api_server_url: "http://127.0.0.1:5000",
    domain_prefix: "dev-fc34y9lq.us",
    audience: "coffee-api",
    client_id: "E7D2nk5Kt6zwraESPmFP12fQIJqtagAb",
    // Local front end
    callback_url: "http://localhost:8100",
};

pub(crate) const PRODUCTION: Option<Declaration> = match (
    option_env!("COFFEE_SHOP_API_SERVER_URL"),
    option_env!("COFFEE_SHOP_AUTH_DOMAIN_PREFIX"),
    option_env!("COFFEE_SHOP_AUTH_AUDIENCE"),
    option_env!("COFFEE_SHOP_AUTH_CLIENT_ID"),
    option_env!("COFFEE_SHOP_AUTH_CALLBACK_URL"),
) {
    (
        Some(api_server_url),
        Some(domain_prefix),
        Some(audience),
        Some(client_id),
        Some(callback_url),
    ) => Some(Declaration {
        production_mode: true,
        api_server_url,
        domain_prefix,
        audience,
        client_id,
        callback_url,
    }),
    _ => None,
};

const _: () = assert!(
    DEVELOPMENT.is_complete(),
    "development declaration has an empty field"
);

const _: () = assert!(
    is_hostname_segment(DEVELOPMENT.domain_prefix),
    "development domain prefix is not a hostname segment"
);

const _: () = if let Some(production) = &PRODUCTION {
    assert!(
        production.is_complete(),
        "production declaration has an empty field"
    );
    assert!(
        is_hostname_segment(production.domain_prefix),
        "production domain prefix is not a hostname segment"
    );
};

/// Look up the declaration of `variant`, if this build has one
pub(crate) const fn declared(variant: Variant) -> Option<Declaration> {
    match variant {
        Variant::Development => Some(DEVELOPMENT),
        Variant::Production => PRODUCTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_is_always_declared() {
        assert_eq!(declared(Variant::Development), Some(DEVELOPMENT));
    }

    #[test]
    fn test_production_mode_matches_variant() {
        for variant in Variant::ALL {
            if let Some(declaration) = declared(variant) {
                assert_eq!(declaration.production_mode, variant.is_production());
            }
        }
    }

    #[test]
    fn test_declared_domain_prefixes_are_hostname_segments() {
        for variant in Variant::ALL {
            if let Some(declaration) = declared(variant) {
                assert!(is_hostname_segment(declaration.domain_prefix));
            }
        }
    }

    #[test]
    fn test_production_declared_with_feature() {
        if cfg!(feature = "production") {
            assert!(declared(Variant::Production).is_some());
        }
    }
}
