//! Context refresh decision engine for Claude Code hooks

mod assembler;
mod config;
mod error;
mod freshness;
mod handlers;
mod locator;
mod types;

pub use assembler::{build_context_content, read_context_files, ContextSection, ContextSource};
pub use config::{ConfigFile, RefreshConfig, CONFIG_FILE, DEFAULT_REFRESH_INTERVAL};
pub use error::ConfigError;
pub use freshness::freshness_indicator;
pub use handlers::{handle, handle_prompt_submit, handle_session_start, process_hook};
pub use locator::{find_context_files, read_claude_md, CONTEXT_EXTENSION};
pub use types::{HookEvent, HookEventKind, HookResponse, HookSpecificOutput};
