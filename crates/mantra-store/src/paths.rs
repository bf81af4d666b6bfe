//! Path resolution for per-project state files

use std::path::{Path, PathBuf};

/// Resolves standard paths under `~/.claude`
#[derive(Debug, Clone)]
pub struct Paths {
    pub home_claude: PathBuf,
}

impl Paths {
    /// Create a resolver rooted at the user's home directory
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::with_home_claude(home.join(".claude")))
    }

    /// Create a resolver rooted at an explicit `.claude` directory
    pub fn with_home_claude(home_claude: impl Into<PathBuf>) -> Self {
        Self {
            home_claude: home_claude.into(),
        }
    }

    /// Project-scoped directory keyed by the project root path
    pub fn project_dir(&self, project_root: &Path) -> PathBuf {
        let hash = project_root.to_string_lossy().replace(['/', '.'], "-");
        self.home_claude.join("projects").join(hash)
    }

    /// Default counter state file for a project
    pub fn state_file(&self, project_root: &Path) -> PathBuf {
        self.project_dir(project_root).join("mantra_state.json")
    }
}
