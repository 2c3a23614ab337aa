//! Job board server
//!
//! Usage: `job-board [config.yaml]`. The config path may also be given via
//! `JOB_BOARD_CONFIG`; without one the server starts empty on the default
//! address. Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::Result;
use job_board::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("JOB_BOARD_CONFIG").ok());

    let config = match config_path {
        Some(path) => {
            tracing::info!(path = %path, "loading configuration");
            AppConfig::from_yaml_file(&path)?
        }
        None => AppConfig::default(),
    };

    tracing::info!(
        companies = config.seed.companies.len(),
        jobs = config.seed.jobs.len(),
        tokens = config.auth.tokens.len(),
        "seeding in-memory stores"
    );

    let bind = config.server.bind.clone();
    ServerBuilder::from_config(&config).serve(&bind).await
}
