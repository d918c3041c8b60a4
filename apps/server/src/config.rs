use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub secret_key: String,
    pub access_token_ttl: Duration,
}

impl Config {
    /// Reads `GUAP_*` variables, loading a `.env` file first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("GUAP_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid GUAP_LISTEN_ADDR")?;
        let db_path = env_or("GUAP_DB_PATH", "./db/app.db");
        let cors_allow = env_or("GUAP_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("GUAP_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .unwrap_or(30000);
        let static_dir = env_or("GUAP_STATIC_DIR", "dist");
        let secret_key =
            std::env::var("GUAP_SECRET_KEY").context("GUAP_SECRET_KEY must be set")?;
        let ttl_secs: u64 = env_or("GUAP_ACCESS_TOKEN_TTL_SECS", "86400")
            .parse()
            .unwrap_or(86400);
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            secret_key,
            access_token_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
