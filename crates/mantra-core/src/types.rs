//! Hook event and response records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Hook events this engine responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEventKind {
    UserPromptSubmit,
    SessionStart,
}

impl HookEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookEventKind::UserPromptSubmit => "UserPromptSubmit",
            HookEventKind::SessionStart => "SessionStart",
        }
    }

    /// Anything other than `SessionStart`, including no name at all, is a prompt submission.
    pub fn from_event_name(name: Option<&str>) -> Self {
        match name {
            Some("SessionStart") => HookEventKind::SessionStart,
            _ => HookEventKind::UserPromptSubmit,
        }
    }
}

impl fmt::Display for HookEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event record delivered by the host on stdin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookEvent {
    /// Project root
    #[serde(default)]
    pub cwd: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_event_name: Option<String>,
    /// Session start cause: startup, resume, clear or compact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl HookEvent {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            ..Default::default()
        }
    }

    pub fn session_start(cwd: impl Into<PathBuf>, source: &str) -> Self {
        Self {
            cwd: cwd.into(),
            hook_event_name: Some(HookEventKind::SessionStart.as_str().to_string()),
            source: Some(source.to_string()),
        }
    }

    pub fn kind(&self) -> HookEventKind {
        HookEventKind::from_event_name(self.hook_event_name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub additional_context: String,
}

/// Response written back to the host on stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResponse {
    pub hook_specific_output: HookSpecificOutput,
}

impl HookResponse {
    pub fn new(kind: HookEventKind, additional_context: String) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: kind.as_str().to_string(),
                additional_context,
            },
        }
    }

    pub fn hook_event_name(&self) -> &str {
        &self.hook_specific_output.hook_event_name
    }

    pub fn additional_context(&self) -> &str {
        &self.hook_specific_output.additional_context
    }
}
