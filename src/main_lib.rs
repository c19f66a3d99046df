use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::market_data::AlphaVantageClient;

/// Shared, immutable per-process state. The gateway itself is stateless;
/// nothing here outlives configuration.
pub struct AppState {
    pub market_data: AlphaVantageClient,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().with_target(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = reqwest::Client::builder().build()?;
    let market_data = AlphaVantageClient::new(client, &config.base_url, &config.api_key);
    Ok(Arc::new(AppState { market_data }))
}
