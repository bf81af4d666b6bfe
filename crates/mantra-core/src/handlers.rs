//! Hook handlers and dispatch

use crate::{
    build_context_content, freshness_indicator, HookEvent, HookEventKind, HookResponse,
    RefreshConfig,
};
use mantra_store::{load_state, save_state, CounterState};
use std::path::Path;

/// Session start cause used when the host omits `source`
const DEFAULT_SESSION_SOURCE: &str = "startup";

fn persist(path: &Path, state: &CounterState) {
    if let Err(e) = save_state(path, state) {
        tracing::warn!(path = %path.display(), error = %e, "failed to save counter state");
    }
}

fn refreshed_context(root_dir: &Path, config: &RefreshConfig, reason: &str) -> String {
    format!(
        "{}\n\n{}",
        freshness_indicator(0, config.refresh_interval, true),
        build_context_content(root_dir, config, reason)
    )
}

/// Count one prompt; inject context when the interval is reached
pub fn handle_prompt_submit(event: &HookEvent, config: &RefreshConfig) -> HookResponse {
    let state = load_state(&config.state_file).advance(config.refresh_interval);
    persist(&config.state_file, &state);

    let context = if state.is_refresh() {
        tracing::debug!(interval = config.refresh_interval, "refresh interval reached");
        let reason = format!("{} prompts reached", config.refresh_interval);
        refreshed_context(&event.cwd, config, &reason)
    } else {
        freshness_indicator(state.count, config.refresh_interval, false)
    };

    HookResponse::new(HookEventKind::UserPromptSubmit, context)
}

/// Reset the counter and always inject context
pub fn handle_session_start(event: &HookEvent, config: &RefreshConfig) -> HookResponse {
    persist(&config.state_file, &CounterState::default());

    let cause = event
        .source
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SESSION_SOURCE);
    tracing::debug!(cause, "session start refresh");
    let reason = format!("session {}", cause);

    HookResponse::new(
        HookEventKind::SessionStart,
        refreshed_context(&event.cwd, config, &reason),
    )
}

/// Run the handler for an explicit event kind
pub fn handle(kind: HookEventKind, event: &HookEvent, config: &RefreshConfig) -> HookResponse {
    match kind {
        HookEventKind::SessionStart => handle_session_start(event, config),
        HookEventKind::UserPromptSubmit => handle_prompt_submit(event, config),
    }
}

/// Route by `hook_event_name`, defaulting to prompt submission
pub fn process_hook(event: &HookEvent, config: &RefreshConfig) -> HookResponse {
    handle(event.kind(), event, config)
}
