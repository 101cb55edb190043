//! Structured logging infrastructure for QuoteGraph

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "quotegraph=info";

/// Initialize the tracing subscriber with the given default filter.
///
/// `RUST_LOG` takes precedence over `default_filter` so operators can raise
/// verbosity without a rebuild.
pub fn init_logging(
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .try_init()?;

    Ok(())
}

/// Initialize logging with the default filter.
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(DEFAULT_LOG_FILTER)
}
