//! Configuration for context refresh

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prompts between automatic refreshes
pub const DEFAULT_REFRESH_INTERVAL: u64 = 50;

/// Project config file, relative to the project root
pub const CONFIG_FILE: &str = ".claude/mantra.json";

fn default_context_dir() -> PathBuf {
    PathBuf::from(".claude/context")
}

fn default_claude_md() -> PathBuf {
    PathBuf::from("CLAUDE.md")
}

/// Refresh configuration for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshConfig {
    /// Where the prompt counter is persisted
    pub state_file: PathBuf,

    /// Prompt count that triggers a refresh. Zero is not a valid interval.
    pub refresh_interval: u64,

    /// Context directory, relative to the project root
    #[serde(default = "default_context_dir")]
    pub context_dir: PathBuf,

    /// Legacy single-file context, relative to the project root
    #[serde(default = "default_claude_md")]
    pub claude_md: PathBuf,
}

impl RefreshConfig {
    pub fn new(state_file: impl Into<PathBuf>) -> Self {
        Self {
            state_file: state_file.into(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            context_dir: default_context_dir(),
            claude_md: default_claude_md(),
        }
    }

    pub fn with_interval(mut self, refresh_interval: u64) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }
}

/// Partial overrides read from `.claude/mantra.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    #[serde(default)]
    pub state_file: Option<PathBuf>,
    #[serde(default)]
    pub refresh_interval: Option<u64>,
    #[serde(default)]
    pub context_dir: Option<PathBuf>,
    #[serde(default)]
    pub claude_md: Option<PathBuf>,
}

impl ConfigFile {
    /// Path of the config file for a project
    pub fn path_for(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE)
    }

    /// Load overrides; a missing file is `Ok(None)`
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let file: ConfigFile =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if file.refresh_interval == Some(0) {
            return Err(ConfigError::InvalidInterval(path.to_path_buf()));
        }

        Ok(Some(file))
    }

    /// Apply overrides; a relative `stateFile` resolves against the project root
    pub fn apply(self, mut config: RefreshConfig, project_root: &Path) -> RefreshConfig {
        if let Some(state_file) = self.state_file {
            config.state_file = project_root.join(state_file);
        }
        if let Some(interval) = self.refresh_interval {
            config.refresh_interval = interval;
        }
        if let Some(context_dir) = self.context_dir {
            config.context_dir = context_dir;
        }
        if let Some(claude_md) = self.claude_md {
            config.claude_md = claude_md;
        }
        config
    }
}
