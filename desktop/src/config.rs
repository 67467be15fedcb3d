use directories::ProjectDirs;
use matika_core::Bounds;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const APP_NAME: &str = "matika";
const ORG_NAME: &str = "matika";
const CONFIG_FILE: &str = "settings.json";
const CONFIG_ENV: &str = "MATIKA_CONFIG";

pub const MIN_WIDTH: f32 = 360.0;
pub const MIN_HEIGHT: f32 = 120.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("no config file at {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid bounds in {path}: {source}")]
    Bounds {
        path: PathBuf,
        source: matika_core::BoundsError,
    },
}

/// Startup settings. Read once, never written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bounds: Bounds,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl WindowConfig {
    /// Raises both sides to at least the minimum window size.
    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.max(MIN_WIDTH),
            height: self.height.max(MIN_HEIGHT),
        }
    }
}

fn default_width() -> f32 {
    420.0
}

fn default_height() -> f32 {
    160.0
}

fn config_path() -> Result<PathBuf, ConfigError> {
    config_path_from(std::env::var_os(CONFIG_ENV))
}

/// `env` is the value of `MATIKA_CONFIG`, which wins over the platform
/// config directory.
fn config_path_from(env: Option<OsString>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", ORG_NAME, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or(ConfigError::NoConfigDir)
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config: Config =
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Bounds::new(config.bounds.min, config.bounds.max).map_err(|source| ConfigError::Bounds {
        path: path.to_path_buf(),
        source,
    })?;

    config.window = config.window.clamped();
    Ok(config)
}

pub fn load_or_default() -> Config {
    match config_path() {
        Ok(path) => load_or_default_from(&path),
        Err(err) => {
            warn!("{err}, using defaults");
            Config::default()
        }
    }
}

/// Falls back to defaults on any failure. A missing file is expected and
/// only logged at debug level.
fn load_or_default_from(path: &Path) -> Config {
    match load_from(path) {
        Ok(config) => config,
        Err(err @ ConfigError::NotFound(_)) => {
            debug!("{err}, using defaults");
            Config::default()
        }
        Err(err) => {
            warn!("{err}, using defaults");
            Config::default()
        }
    }
}
