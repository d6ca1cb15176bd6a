use std::sync::Arc;

use anyhow::Context;
use bookshelf::config::ServerConfig;
use bookshelf::{http, Catalog, InMemoryBookStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, env_file_loaded) = ServerConfig::load().context("failed to read .env file")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_filter))
                .context("invalid log filter")?,
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_file_loaded {
        info!("loaded .env file");
    }

    let catalog = Arc::new(Catalog::new(InMemoryBookStore::new()));
    let addr = config.bind_addr();
    http::serve(catalog, &addr)
        .await
        .with_context(|| format!("server on {addr} failed"))?;

    Ok(())
}
