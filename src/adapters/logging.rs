use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Installs a stderr fmt subscriber. `RUST_LOG` wins over `level`.
pub fn init(level: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Other(e.to_string()))
}
