mod api;
mod config;
mod error;
mod main_lib;
mod market_data;
mod models;

use api::app_router;
use config::Config;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config)?;
    let router = app_router(state, &config);

    tracing::info!("Fintra API listening on {}", config.listen_addr);
    tracing::info!("Registered routes:");
    for route in models::AVAILABLE_ROUTES {
        tracing::info!("  GET {}", route);
    }

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
