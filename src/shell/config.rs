use anyhow::Context;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub cors_allow_any_origin: bool,
}

impl AppConfig {
    /// Reads the process environment, after loading a `.env` file when one is present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse()
            .context("HOST must be an IP address")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a number between 0 and 65535, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let cors_allow_any_origin = match lookup("CORS_ALLOW_ANY_ORIGIN") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("CORS_ALLOW_ANY_ORIGIN must be true or false, got {raw:?}"))?,
            None => false,
        };

        Ok(Self {
            host,
            port,
            static_dir,
            cors_allow_any_origin,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
