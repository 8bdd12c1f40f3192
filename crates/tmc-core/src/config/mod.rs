//! Persisted configuration in `~/.tmc/`.
//!
//! The file is the lowest-precedence layer of the connection profile. It is
//! optional: a missing file is the same as an empty one. `save` writes
//! `config.yml`; loading also accepts `config.yaml`.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".tmc";
/// File names probed on load, in order.
const CONFIG_FILE_NAMES: &[&str] = &["config.yaml", "config.yml"];
/// File name written by `save`.
const SAVE_FILE_NAME: &str = "config.yml";

/// On-disk configuration. Keys mirror the command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Full connection URL; overrides host, port, user, password, https and rpcpath.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Stored in plaintext.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub useragent: Option<String>,
    /// RPC request path on the daemon (e.g. `/transmission/rpc`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpcpath: Option<String>,
}

/// `~/.tmc`
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR_NAME))
        .ok_or(ConfigError::NoHomeDir)
}

/// `~/.tmc/config.yml`
pub fn save_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(SAVE_FILE_NAME))
}

/// Loads the config from `~/.tmc`, or defaults when no file exists.
pub fn load() -> Result<StoredConfig, ConfigError> {
    load_from(&config_dir()?)
}

/// Loads the first config file found in `dir`, or defaults when there is none.
pub fn load_from(dir: &Path) -> Result<StoredConfig, ConfigError> {
    let Some(path) = CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
    else {
        tracing::debug!("no config file in {}", dir.display());
        return Ok(StoredConfig::default());
    };

    let data = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    tracing::debug!("loaded config from {}", path.display());
    parse(&data).map_err(|source| ConfigError::Parse { path, source })
}

fn parse(data: &str) -> Result<StoredConfig, serde_yaml::Error> {
    // An empty document deserializes to unit, not a mapping.
    if data.trim().is_empty() {
        return Ok(StoredConfig::default());
    }
    serde_yaml::from_str(data)
}

/// Writes `cfg` to `path`, creating parent directories as needed.
pub fn save_to(path: &Path, cfg: &StoredConfig) -> Result<(), ConfigError> {
    if cfg.password.is_some() {
        tracing::warn!("saving plaintext password to {}", path.display());
    }
    let yaml = serde_yaml::to_string(cfg).map_err(ConfigError::Serialize)?;

    if let Some(parent) = path.parent() {
        create_private_dir(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    write_private_file(path, yaml.as_bytes()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("saved config to {}", path.display());
    Ok(())
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_private_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(data)
}

#[cfg(not(unix))]
fn write_private_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    fs::write(path, data)
}
