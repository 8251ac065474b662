//! toolbelt server binary.

use toolbelt::{api, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Starting toolbelt {} on {}:{}",
        env!("CARGO_PKG_VERSION"),
        config.host,
        config.port
    );

    api::serve(config).await
}
