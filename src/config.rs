use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub api_key: String,
    pub base_url: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment (a `.env` file is honored).
    ///
    /// The upstream credential is never baked in: startup fails when
    /// `FINTRA_API_KEY` is missing or empty.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = match std::env::var("FINTRA_LISTEN_ADDR") {
            Ok(addr) => addr.parse().context("Invalid FINTRA_LISTEN_ADDR")?,
            // The historical deployment configured only the port
            Err(_) => {
                let port: u16 = std::env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .context("Invalid PORT")?;
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let api_key = std::env::var("FINTRA_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .context("FINTRA_API_KEY must be set to an Alpha Vantage API key")?;

        let base_url =
            std::env::var("FINTRA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let cors_allow = std::env::var("FINTRA_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_ms: u64 = std::env::var("FINTRA_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);

        Ok(Self {
            listen_addr,
            api_key,
            base_url,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
