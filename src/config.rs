//! Configuration module
//!
//! Loads the immutable startup configuration from an optional `config.toml`,
//! environment variables (`SERVER_` prefix), and built-in defaults.
//! Nothing here is runtime-reconfigurable; handlers see the configuration
//! through a shared `AppState`.

use crate::storage::{AssetStore, CsvStore, MediaStore};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub media: MediaConfig,
    pub assets: AssetsConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
}

/// Performance configuration
///
/// A zero read/write timeout disables the per-connection timeout entirely,
/// which long-running video streams depend on.
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Media directory configuration
#[derive(Debug, Deserialize, Clone)]
pub struct MediaConfig {
    /// Directory scanned for video files
    pub dir: String,
    /// Allow-listed video extensions, compared case-insensitively
    pub extensions: Vec<String>,
}

/// Static asset configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Asset root directory
    pub dir: String,
    /// Default document served for `/`
    pub index_file: String,
    /// CSV file overwritten by `/save-csv`, resolved under `dir`
    pub csv_file: String,
}

impl Config {
    /// Load configuration from the default `config.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let default_media_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("videos");

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 0)?
            .set_default("performance.write_timeout", 0)?
            .set_default(
                "media.dir",
                default_media_dir.to_string_lossy().to_string(),
            )?
            .set_default(
                "media.extensions",
                vec!["mp4", "webm", "mov", "avi", "mkv", "m4v"],
            )?
            .set_default("assets.dir", ".")?
            .set_default("assets.index_file", "index.html")?
            .set_default("assets.csv_file", "rules.csv")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state: the configuration plus the storage handles
/// built from it. Constructed once at startup and passed by `Arc` into the
/// router and handlers.
pub struct AppState {
    pub config: Config,
    pub media: MediaStore,
    pub csv: CsvStore,
    pub assets: AssetStore,
    /// Lock-free copy of `logging.access_log`, read on every request
    pub cached_access_log: AtomicBool,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let media = MediaStore::new(
            PathBuf::from(&config.media.dir),
            config.media.extensions.clone(),
        );
        let csv = CsvStore::new(PathBuf::from(&config.assets.dir).join(&config.assets.csv_file));
        let assets = AssetStore::new(
            PathBuf::from(&config.assets.dir),
            config.assets.index_file.clone(),
        );
        let cached_access_log = AtomicBool::new(config.logging.access_log);

        Self {
            config,
            media,
            csv,
            assets,
            cached_access_log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied_without_config_file() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.performance.read_timeout, 0);
        assert_eq!(
            cfg.media.extensions,
            vec!["mp4", "webm", "mov", "avi", "mkv", "m4v"]
        );
        assert_eq!(cfg.assets.index_file, "index.html");
        assert_eq!(cfg.assets.csv_file, "rules.csv");
    }

    #[test]
    fn socket_addr_parses_host_and_port() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        let addr = cfg.socket_addr().expect("default address should parse");
        assert_eq!(addr.port(), 3000);
    }
}
