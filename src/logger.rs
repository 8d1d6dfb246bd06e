use std::env;
use tracing_subscriber::EnvFilter;

const CI_ENV_VAR: &str = "CI";
const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Installs the global tracing subscriber: JSON lines on CI, human readable output filtered by
/// `RUST_LOG` (default `info`) otherwise. Calling it more than once is a no-op.
pub fn init() {
    let _ = match env::var_os(CI_ENV_VAR) {
        Some(_) => tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::INFO)
            .with_current_span(true)
            .try_init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE)))
            .try_init(),
    };
}
