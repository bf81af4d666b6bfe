use std::path::PathBuf;
use thiserror::Error;

/// Rejected project configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("refreshInterval must be positive in {}", .0.display())]
    InvalidInterval(PathBuf),
}
