use std::path::PathBuf;
use thiserror::Error;

/// Configuration failures. These are terminal and map to distinct process
/// exit codes so scripts can tell them apart.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file yet; a commented sample was written for the user.
    #[error("no configuration found; wrote a sample to {0} — edit it and run again")]
    Missing(PathBuf),

    /// The file exists but could not be read.
    #[error("could not read configuration at {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON once comment lines are stripped.
    #[error("configuration at {path} is not valid JSON after comment stripping: {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// `html_parser` names a markup backend that is not registered.
    #[error("unknown html_parser backend {0:?}")]
    UnknownBackend(String),

    /// The platform exposes no user configuration directory.
    #[error("no user configuration directory available")]
    NoConfigDir,
}

impl ConfigError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Missing(_) => 2,
            ConfigError::Unreadable { .. } | ConfigError::NoConfigDir => 3,
            ConfigError::InvalidJson { .. } => 4,
            ConfigError::UnknownBackend(_) => 5,
        }
    }
}
