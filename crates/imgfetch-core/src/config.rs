use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetcher::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Folder images are saved into, relative to the working directory.
pub const DEFAULT_FOLDER: &str = "Fetched_Images";

/// Global configuration loaded from `~/.config/imgfetch/config.toml`.
/// Every key is optional; missing keys take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImgfetchConfig {
    /// Destination folder for fetched images.
    pub folder: PathBuf,
    /// User-Agent header sent with each request.
    pub user_agent: String,
    /// Total per-request timeout in seconds. 0 means the default, never unbounded.
    pub timeout_secs: u64,
}

impl Default for ImgfetchConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from(DEFAULT_FOLDER),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl ImgfetchConfig {
    /// Per-request timeout; libcurl treats 0 as "no timeout", so 0 maps to the default.
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgfetchConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ImgfetchConfig> {
    if !path.exists() {
        let default_cfg = ImgfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ImgfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    if cfg.timeout_secs == 0 {
        tracing::warn!(
            "timeout_secs = 0 in {}; using {}s",
            path.display(),
            DEFAULT_TIMEOUT.as_secs()
        );
    }
    Ok(cfg)
}
