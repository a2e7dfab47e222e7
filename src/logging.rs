//! Initialisation des logs (tracing)
//!
//!   RUST_LOG=church_management=debug  # filtre fin
//!   --verbose                        # debug si RUST_LOG absent

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

const DEFAULT_FILTER: &str = "church_management=info,sea_orm=warn,sqlx=warn";

pub fn init_tracing(verbose: bool) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("church_management=debug,sea_orm=info")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .compact()
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}
