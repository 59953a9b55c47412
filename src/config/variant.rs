//! Build/deployment variants
//!
//! A variant names one pre-declared configuration record. Exactly one variant
//! is selected per build through the `production` Cargo feature.

use clap::ValueEnum;
use std::fmt;

use crate::error::ConfigError;

/// Named build/deployment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    #[value(alias = "dev")]
    Development,
    #[value(alias = "prod")]
    Production,
}

impl Variant {
    /// Every variant the crate knows how to look up
    pub const ALL: [Variant; 2] = [Variant::Development, Variant::Production];

    /// The variant chosen for this build
    pub const fn selected() -> Self {
        if cfg!(feature = "production") {
            Variant::Production
        } else {
            Variant::Development
        }
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Variant::Production)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Variant::Development => "development",
            Variant::Production => "production",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::selected()
    }
}

impl std::str::FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Variant::Development),
            "production" | "prod" => Ok(Variant::Production),
            _ => Err(ConfigError::not_found(s.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("development".parse::<Variant>().unwrap(), Variant::Development);
        assert_eq!("dev".parse::<Variant>().unwrap(), Variant::Development);
        assert_eq!("Production".parse::<Variant>().unwrap(), Variant::Production);
        assert_eq!(" prod ".parse::<Variant>().unwrap(), Variant::Production);
    }

    #[test]
    fn test_unknown_variant_is_not_found() {
        let err = "staging".parse::<Variant>().unwrap_err();
        match err {
            ConfigError::ConfigurationNotFound { variant } => assert_eq!(variant, "staging"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display_round_trips() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_selected_follows_feature() {
        assert_eq!(
            Variant::selected().is_production(),
            cfg!(feature = "production")
        );
        assert_eq!(Variant::default(), Variant::selected());
    }

    #[test]
    fn test_cli_and_from_str_agree() {
        for name in ["development", "dev", "production", "prod"] {
            assert_eq!(
                <Variant as ValueEnum>::from_str(name, false).unwrap(),
                name.parse::<Variant>().unwrap()
            );
        }
        assert!(<Variant as ValueEnum>::from_str("staging", false).is_err());
    }
}
