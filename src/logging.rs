//! Logging setup
//!
//! Diagnostics go to stderr so that stdout stays reserved for exported
//! configuration documents. Production records log JSON at `info`;
//! development records log compact text at `debug`.

use anyhow::Result;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Verbosity used when nothing overrides it
pub const fn default_log_level(production_mode: bool) -> &'static str {
    if production_mode {
        "info"
    } else {
        "debug"
    }
}

/// Pick the filter directive: explicit override first, then the mode default
pub fn resolve_log_level(production_mode: bool, override_level: Option<&str>) -> String {
    override_level
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or_else(|| default_log_level(production_mode))
        .to_string()
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over both `override_level` and the mode default.
pub fn init_tracing(production_mode: bool, override_level: Option<&str>) -> Result<()> {
    let log_level = resolve_log_level(production_mode, override_level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let layer: Box<dyn Layer<Registry> + Send + Sync> = if production_mode {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed()
    };

    tracing_subscriber::registry().with(layer).try_init()?;

    Ok(())
}
