//! Assembles the context block injected on refresh

use crate::{find_context_files, read_claude_md, RefreshConfig};
use std::path::{Path, PathBuf};

/// One context file, labelled by its file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSection {
    pub name: String,
    pub content: String,
}

impl ContextSection {
    /// Read a context file; `None` if it vanished or cannot be read
    pub fn read(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_string();
        match std::fs::read(path) {
            Ok(bytes) => Some(Self {
                name,
                content: String::from_utf8_lossy(&bytes).trim().to_string(),
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable context file");
                None
            }
        }
    }

    pub fn render(&self) -> String {
        format!("### {}\n{}", self.name, self.content)
    }
}

fn join_sections(sections: &[ContextSection]) -> String {
    sections
        .iter()
        .map(ContextSection::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn read_sections(paths: &[PathBuf]) -> Vec<ContextSection> {
    paths
        .iter()
        .filter_map(|path| ContextSection::read(path))
        .collect()
}

/// Read and label each file in order, dropping any that cannot be read
pub fn read_context_files(paths: &[PathBuf]) -> String {
    join_sections(&read_sections(paths))
}

/// Where refreshed context comes from, in order of preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextSource {
    /// Files from the context directory
    Files(Vec<ContextSection>),
    /// The legacy single document
    Legacy { name: String, content: String },
    /// Nothing to inject
    Absent { context_dir: PathBuf },
}

impl ContextSource {
    pub fn resolve(root_dir: &Path, config: &RefreshConfig) -> Self {
        let files = find_context_files(root_dir, &config.context_dir);
        if !files.is_empty() {
            return ContextSource::Files(read_sections(&files));
        }

        if let Some(content) = read_claude_md(root_dir, &config.claude_md) {
            return ContextSource::Legacy {
                name: config.claude_md.display().to_string(),
                content,
            };
        }

        ContextSource::Absent {
            context_dir: config.context_dir.clone(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ContextSource::Files(_) => "files",
            ContextSource::Legacy { .. } => "legacy",
            ContextSource::Absent { .. } => "none",
        }
    }

    /// Render with a header carrying `reason` verbatim
    pub fn render(&self, reason: &str) -> String {
        match self {
            ContextSource::Files(sections) => {
                let header = format!("**Context Refresh** ({})", reason);
                if sections.is_empty() {
                    header
                } else {
                    format!("{}\n\n{}", header, join_sections(sections))
                }
            }
            ContextSource::Legacy { name, content } => format!(
                "**Context Refresh** ({}, from {})\n\n{}\n\n---\n\
                 💡 Tip: Multi-file context is supported and recommended. \
                 Split project context into `.claude/context/*.yml` files \
                 (run `mantra init` to scaffold them).",
                reason, name, content
            ),
            ContextSource::Absent { context_dir } => format!(
                "**Context Refresh** ({})\n\n\
                 ⚠️ No context files found. Create `{}/*.yml` files \
                 (run `mantra init` to scaffold starter files) \
                 or add a CLAUDE.md to the project root.",
                reason,
                context_dir.display()
            ),
        }
    }
}

/// Build the refresh block: context files, else CLAUDE.md, else a warning
pub fn build_context_content(root_dir: &Path, config: &RefreshConfig, reason: &str) -> String {
    let source = ContextSource::resolve(root_dir, config);
    tracing::debug!(source = source.kind(), reason, "assembled context refresh");
    source.render(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(temp: &TempDir) -> RefreshConfig {
        RefreshConfig::new(temp.path().join("state.json"))
    }

    fn write_context(root: &Path, name: &str, content: &str) {
        let dir = root.join(".claude").join("context");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_read_context_files_empty() {
        assert_eq!(read_context_files(&[]), "");
    }

    #[test]
    fn test_read_context_files_formats_sections() {
        let temp = TempDir::new().unwrap();
        let file1 = temp.path().join("behavior.yml");
        let file2 = temp.path().join("git.yml");
        std::fs::write(&file1, "stance: skeptical").unwrap();
        std::fs::write(&file2, "branch: main").unwrap();

        let content = read_context_files(&[file1, file2]);
        assert_eq!(
            content,
            "### behavior.yml\nstance: skeptical\n\n### git.yml\nbranch: main"
        );
    }

    #[test]
    fn test_read_context_files_skips_unreadable() {
        let temp = TempDir::new().unwrap();
        let file1 = temp.path().join("exists.yml");
        let file2 = temp.path().join("nonexistent.yml");
        std::fs::write(&file1, "content: here").unwrap();

        let content = read_context_files(&[file2, file1]);
        assert!(content.contains("### exists.yml"));
        assert!(content.contains("content: here"));
        assert!(!content.contains("nonexistent"));
    }

    #[test]
    fn test_read_context_files_keeps_non_utf8() {
        let temp = TempDir::new().unwrap();
        let latin = temp.path().join("latin.yml");
        std::fs::write(&latin, b"name: caf\xe9\n").unwrap();

        let content = read_context_files(&[latin]);
        assert!(content.starts_with("### latin.yml\nname: caf"));
        assert!(content.contains('\u{FFFD}'));
    }

    #[test]
    fn test_non_utf8_context_file_not_dropped_on_refresh() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".claude").join("context");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("latin.yml"), b"name: caf\xe9\n").unwrap();

        let content = build_context_content(temp.path(), &config_in(&temp), "r");
        assert!(content.contains("### latin.yml\nname: caf"));
    }

    #[test]
    fn test_resolve_prefers_files() {
        let temp = TempDir::new().unwrap();
        write_context(temp.path(), "test.yml", "key: value");
        std::fs::write(temp.path().join("CLAUDE.md"), "# Legacy").unwrap();

        let source = ContextSource::resolve(temp.path(), &config_in(&temp));
        assert_eq!(
            source,
            ContextSource::Files(vec![ContextSection {
                name: "test.yml".to_string(),
                content: "key: value".to_string(),
            }])
        );
    }

    #[test]
    fn test_resolve_falls_back_to_legacy() {
        let temp = TempDir::new().unwrap();
        write_context(temp.path(), "notes.md", "# only docs");
        std::fs::write(temp.path().join("CLAUDE.md"), "# My Project\n").unwrap();

        let source = ContextSource::resolve(temp.path(), &config_in(&temp));
        assert_eq!(
            source,
            ContextSource::Legacy {
                name: "CLAUDE.md".to_string(),
                content: "# My Project".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_absent() {
        let temp = TempDir::new().unwrap();
        let source = ContextSource::resolve(temp.path(), &config_in(&temp));
        assert_eq!(source.kind(), "none");
    }

    #[test]
    fn test_files_render_has_no_tip() {
        let temp = TempDir::new().unwrap();
        write_context(temp.path(), "test.yml", "key: value");

        let content = build_context_content(temp.path(), &config_in(&temp), "session startup");
        assert!(content.starts_with("**Context Refresh** (session startup)\n\n"));
        assert!(content.contains("### test.yml\nkey: value"));
        assert!(!content.contains("Tip"));
        assert!(!content.contains("CLAUDE.md"));
    }

    #[test]
    fn test_legacy_render_has_header_and_tip() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("CLAUDE.md"), "# My Project").unwrap();

        let content = build_context_content(temp.path(), &config_in(&temp), "50 prompts reached");
        assert!(content.starts_with("**Context Refresh** (50 prompts reached, from CLAUDE.md)"));
        assert!(content.contains("# My Project"));
        assert!(content.contains("Multi-file context is supported"));
    }

    #[test]
    fn test_absent_render_warns() {
        let temp = TempDir::new().unwrap();

        let content = build_context_content(temp.path(), &config_in(&temp), "session clear");
        assert!(content.starts_with("**Context Refresh** (session clear)"));
        assert!(content.contains("No context files found"));
        assert!(content.contains(".claude/context/*.yml"));
    }

    #[test]
    fn test_custom_legacy_name_in_header() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("AGENTS.md"), "rules").unwrap();
        let mut config = config_in(&temp);
        config.claude_md = PathBuf::from("AGENTS.md");

        let content = build_context_content(temp.path(), &config, "session resume");
        assert!(content.contains("(session resume, from AGENTS.md)"));
    }
}
