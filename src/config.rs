//! Configuration for sagefeed.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (SAGEFEED_HOME, SAGEFEED_DATA, YOUTUBE_API_KEY)
//! 2. Config file (.sagefeed/config.yaml)
//! 3. Defaults (~/.sagefeed)
//!
//! Config file discovery:
//! - Searches current directory and parents for .sagefeed/config.yaml
//! - Paths in config file are relative to the config file's parent directory
//!
//! The resolved configuration is an explicit struct handed to each component
//! at construction, so tests can substitute their own.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default channel polled by the video source
pub const DEFAULT_CHANNEL_ID: &str = "UCcYzLCs3zrQIBVHYA1sK2sw";

/// Default bound on each outbound request
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub youtube: Option<YouTubeConfig>,
    /// Named trusted source URLs
    #[serde(default)]
    pub sources: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to config file)
    pub home: Option<String>,
    /// Store file location (relative to the project root)
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeConfig {
    pub channel_id: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// Absolute path to sagefeed home (state directory)
    pub home: PathBuf,
    /// Absolute path to the store file
    pub data_file: PathBuf,
    /// YouTube API key, None when not configured
    pub api_key: Option<String>,
    /// Channel the video source polls
    pub channel_id: String,
    /// Bound on each outbound request
    pub request_timeout: Duration,
    /// Named trusted source URLs (informational; the quote source links
    /// to the "instagram" entry)
    pub trusted_sources: HashMap<String, String>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl UpdaterConfig {
    /// Load configuration from all sources
    pub fn load() -> Result<Self> {
        let default_home = dirs::home_dir()
            .context("Failed to determine home directory")?
            .join(".sagefeed");

        let config_file = find_config_file();

        let (home, data_file, channel_id, timeout, trusted_sources) =
            if let Some(ref config_path) = config_file {
                let config = load_config_file(config_path)?;

                // Base directory is the parent of .sagefeed/
                let base_dir = config_path
                    .parent()
                    .and_then(|p| p.parent())
                    .unwrap_or(Path::new("."));

                let home = if let Ok(env_home) = std::env::var("SAGEFEED_HOME") {
                    PathBuf::from(env_home)
                } else if let Some(ref home_path) = config.paths.home {
                    let sagefeed_dir = config_path.parent().unwrap_or(Path::new("."));
                    resolve_path(sagefeed_dir, home_path)
                } else {
                    default_home.clone()
                };

                let data_file = if let Ok(env_data) = std::env::var("SAGEFEED_DATA") {
                    PathBuf::from(env_data)
                } else if let Some(ref data_path) = config.paths.data_file {
                    resolve_path(base_dir, data_path)
                } else {
                    home.join("content.json")
                };

                let channel_id = config
                    .youtube
                    .as_ref()
                    .and_then(|y| y.channel_id.clone())
                    .unwrap_or_else(|| DEFAULT_CHANNEL_ID.to_string());

                let timeout = config
                    .youtube
                    .as_ref()
                    .and_then(|y| y.timeout_seconds)
                    .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

                let trusted_sources = if config.sources.is_empty() {
                    default_trusted_sources()
                } else {
                    config.sources
                };

                (home, data_file, channel_id, timeout, trusted_sources)
            } else {
                // No config file - use env vars or defaults
                let home = std::env::var("SAGEFEED_HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_home.clone());

                let data_file = std::env::var("SAGEFEED_DATA")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| home.join("content.json"));

                (
                    home,
                    data_file,
                    DEFAULT_CHANNEL_ID.to_string(),
                    DEFAULT_TIMEOUT_SECONDS,
                    default_trusted_sources(),
                )
            };

        Ok(Self {
            home,
            data_file,
            api_key: api_key_from_env(),
            channel_id,
            request_timeout: Duration::from_secs(timeout),
            trusted_sources,
            config_file,
        })
    }
}

/// Read the API key from the environment; empty values count as unset
fn api_key_from_env() -> Option<String> {
    std::env::var("YOUTUBE_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
}

fn default_trusted_sources() -> HashMap<String, String> {
    [
        ("foundation", "https://example.org"),
        ("instagram", "https://www.instagram.com/dailywisdom/"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".sagefeed").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}
