#![allow(dead_code)]

use mantra_core::{HookEvent, RefreshConfig};
use mantra_store::load_state;
use std::path::Path;
use tempfile::TempDir;

/// Throwaway project root with its own state file
pub struct Project {
    pub dir: TempDir,
    pub config: RefreshConfig,
}

impl Project {
    pub fn new(interval: u64) -> Self {
        let dir = TempDir::new().unwrap();
        let config = RefreshConfig::new(dir.path().join("state").join("mantra_state.json"))
            .with_interval(interval);
        Self { dir, config }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn prompt_event(&self) -> HookEvent {
        HookEvent::new(self.root())
    }

    pub fn session_event(&self, source: &str) -> HookEvent {
        HookEvent::session_start(self.root(), source)
    }

    pub fn write_context(&self, name: &str, content: &str) {
        let dir = self.root().join(".claude").join("context");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(name), content).unwrap();
    }

    pub fn write_claude_md(&self, content: &str) {
        std::fs::write(self.root().join("CLAUDE.md"), content).unwrap();
    }

    pub fn stored_count(&self) -> u64 {
        load_state(&self.config.state_file).count
    }
}
