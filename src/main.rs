//! Coffee shop configuration tool
//!
//! Inspects, exports and checks the configuration variants compiled into
//! this build.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use coffee_shop_config::{config::Variant, logging, ConfigError, ConfigurationRecord};

/// Coffee shop configuration tool
#[derive(Parser, Debug)]
#[command(name = "coffee-shop-config")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Variant: dev, prod (defaults to the variant selected at build time)
    #[arg(short, long, global = true)]
    variant: Option<Variant>,

    /// Log level: trace, debug, info, warn, error (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a summary of the variant's record
    Show,

    /// Print the variant's record as a JSON document for the front-end build
    Export {
        /// Pretty-print the document
        #[arg(long)]
        pretty: bool,
    },

    /// Validate every declared variant (ignores --variant)
    Check,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let variant = args.variant.unwrap_or_else(Variant::selected);

    logging::init_tracing(variant.is_production(), args.log_level.as_deref())?;

    match args.command {
        Command::Show => {
            let record = load(variant)?;
            tracing::info!(
                variant = %variant,
                production_mode = record.production_mode(),
                api_server_url = %record.api_server_url(),
                "Configuration loaded"
            );
            println!("{} configuration", variant);
            println!("{}", record);
        }
        Command::Export { pretty } => {
            let record = load(variant)?;
            println!("{}", record.to_json(pretty)?);
        }
        Command::Check => check()?,
    }

    Ok(())
}

fn load(variant: Variant) -> Result<ConfigurationRecord> {
    ConfigurationRecord::load(variant)
        .with_context(|| format!("Failed to load {} configuration", variant))
}

/// Outcome of checking one variant
#[derive(Debug, PartialEq, Eq)]
enum CheckStatus {
    Ok,
    NotDeclared,
    Failed(String),
}

/// An undeclared variant is only a failure when the build selected it
fn check_status(
    variant: Variant,
    selected: Variant,
    loaded: std::result::Result<ConfigurationRecord, ConfigError>,
) -> CheckStatus {
    match loaded {
        Ok(_) => CheckStatus::Ok,
        Err(err) if err.is_not_found() && variant != selected => CheckStatus::NotDeclared,
        Err(err) => CheckStatus::Failed(err.to_string()),
    }
}

fn check() -> Result<()> {
    let selected = Variant::selected();
    let mut failures = 0;

    for variant in Variant::ALL {
        match check_status(variant, selected, ConfigurationRecord::load(variant)) {
            CheckStatus::Ok => println!("{:<12} ok", variant),
            CheckStatus::NotDeclared => {
                tracing::warn!(variant = %variant, "Variant is not declared in this build");
                println!("{:<12} not declared", variant);
            }
            CheckStatus::Failed(err) => {
                tracing::error!(variant = %variant, error = %err, "Variant failed validation");
                println!("{:<12} FAILED: {}", variant, err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} variant(s) failed the configuration check", failures);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undeclared_unselected_variant_is_not_a_failure() {
        let status = check_status(
            Variant::Production,
            Variant::Development,
            Err(ConfigError::not_found("production")),
        );
        assert_eq!(status, CheckStatus::NotDeclared);
    }

    #[test]
    fn test_undeclared_selected_variant_fails() {
        let status = check_status(
            Variant::Production,
            Variant::Production,
            Err(ConfigError::not_found("production")),
        );
        assert!(matches!(status, CheckStatus::Failed(_)));
    }

    #[test]
    fn test_invalid_declared_variant_fails() {
        let invalid = ConfigurationRecord::from_json("{}").unwrap_err();
        let status = check_status(Variant::Production, Variant::Development, Err(invalid));
        assert!(matches!(status, CheckStatus::Failed(_)));
    }

    #[test]
    fn test_development_checks_ok() {
        let status = check_status(
            Variant::Development,
            Variant::selected(),
            ConfigurationRecord::load(Variant::Development),
        );
        assert_eq!(status, CheckStatus::Ok);
    }
}
