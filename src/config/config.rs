use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

use crate::ui::controller::ControllerOptions;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("server url \"{url}\" is invalid: {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("server url \"{0}\" must use http or https")]
    UnsupportedScheme(String),
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub server_url: Option<String>,
    pub storage_path: Option<String>,
    pub max_time_to_crack: Option<f64>,
    pub auto_scroll: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: Url,
    /// Key-value file holding the API key.
    pub storage_path: PathBuf,
    /// Log file used while the terminal UI owns the screen.
    pub log_path: PathBuf,
    pub max_time_to_crack: Option<f64>,
    pub auto_scroll: bool,
}

impl Config {
    pub fn create(server_url: Option<String>) -> Result<Self, ConfigError> {
        // 1) Load config file if present
        let file_cfg = load_file_config();

        // 2) Server URL precedence: cli > env > config file > default
        let raw_url = server_url
            .or_else(|| env::var("PWGAUGE_SERVER_URL").ok())
            .or(file_cfg.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let server_url = parse_server_url(&raw_url)?;

        // 3) Storage path precedence: env > config file > data dir
        let storage_path = env::var("PWGAUGE_STORAGE_PATH")
            .ok()
            .or(file_cfg.storage_path)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_data_dir().join("storage.json"));

        // 4) Optional request/presentation settings: env > config file > default
        let max_time_to_crack = env::var("PWGAUGE_MAX_TIME_TO_CRACK")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .or(file_cfg.max_time_to_crack);
        let auto_scroll = env::var("PWGAUGE_AUTO_SCROLL")
            .ok()
            .and_then(|s| s.parse::<bool>().ok())
            .or(file_cfg.auto_scroll)
            .unwrap_or(true);

        Ok(Config {
            server_url,
            storage_path,
            log_path: default_data_dir().join("pwgauge.log"),
            max_time_to_crack,
            auto_scroll,
        })
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            max_time_to_crack: self.max_time_to_crack,
            auto_scroll: self.auto_scroll,
        }
    }
}

fn parse_server_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidServerUrl {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(raw.to_string())),
    }
}

fn load_file_config() -> FileConfig {
    let (_, cfg) = load_file_config_with_path();
    cfg
}

pub fn config_file_path() -> PathBuf {
    // Allow tests/users to override config dir via PWGAUGE_CONFIG_DIR; else use platform default
    let cfg_dir = if let Ok(p) = env::var("PWGAUGE_CONFIG_DIR") {
        PathBuf::from(p)
    } else {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    };
    cfg_dir.join("pwgauge").join("config.toml")
}

pub fn load_file_config_with_path() -> (PathBuf, FileConfig) {
    let path = config_file_path();
    let cfg = match std::fs::read_to_string(&path) {
        Ok(s) => toml::from_str::<FileConfig>(&s).unwrap_or_default(),
        Err(_) => FileConfig::default(),
    };
    (path, cfg)
}

fn default_data_dir() -> PathBuf {
    // Prefer platform data_dir, allow override via PWGAUGE_DATA_DIR, fallback to ~/.pwgauge
    if let Ok(base) = env::var("PWGAUGE_DATA_DIR") {
        return PathBuf::from(base).join("pwgauge");
    }
    if let Some(mut p) = dirs::data_dir() {
        p.push("pwgauge");
        return p;
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(&home).join(".pwgauge")
}
