use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Where to listen and what to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// bundle built by trunk / cargo-leptos
    pub dist: PathBuf,
    pub assets: PathBuf,
}

impl ServerConfig {
    /// Reads `INKAYA_*` variables, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let port = match get("INKAYA_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("INKAYA_PORT is not a port number: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("INKAYA_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            dist: get("INKAYA_DIST").map(PathBuf::from).unwrap_or_else(|| root.join("../dist")),
            assets: get("INKAYA_ASSETS")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../assets")),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist.join("index.html")
    }
}
