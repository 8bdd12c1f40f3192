//! Configuration and connection-profile errors.

use std::io;
use std::path::PathBuf;

/// Anything that stops the effective connection profile from being built or saved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    NoHomeDir,
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to serialize config")]
    Serialize(#[source] serde_yaml::Error),
    #[error("failed to write config file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid connection url {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("connection url {0:?} has no host")]
    UrlWithoutHost(String),
    #[error("failed to read password")]
    Prompt(#[source] io::Error),
}
