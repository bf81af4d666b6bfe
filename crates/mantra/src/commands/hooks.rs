use anyhow::Context;
use mantra_core::{
    handle, ConfigError, ConfigFile, HookEvent, HookEventKind, HookResponse, RefreshConfig,
};
use mantra_store::Paths;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Upper bound on the event record read from stdin
const MAX_INPUT_BYTES: u64 = 1_048_576;

/// State file used when no home directory can be resolved
const FALLBACK_STATE_FILE: &str = ".claude/mantra_state.json";

fn default_state_file(project_root: &Path) -> PathBuf {
    match Paths::new() {
        Ok(paths) => paths.state_file(project_root),
        Err(e) => {
            tracing::warn!(error = %e, "home directory unavailable, keeping state in project");
            project_root.join(FALLBACK_STATE_FILE)
        }
    }
}

/// Defaults, then `.claude/mantra.json`, then the CLI interval.
///
/// A rejected config file is returned alongside the defaults it fell back to.
pub(crate) fn resolve_config(
    project_root: &Path,
    interval: Option<u64>,
) -> (RefreshConfig, Option<ConfigError>) {
    let mut config = RefreshConfig::new(default_state_file(project_root));
    let mut error = None;

    match ConfigFile::load(&ConfigFile::path_for(project_root)) {
        Ok(Some(file)) => config = file.apply(config, project_root),
        Ok(None) => {}
        Err(e) => error = Some(e),
    }

    if let Some(interval) = interval {
        config.refresh_interval = interval;
    }

    (config, error)
}

fn parse_event(input: &[u8]) -> HookEvent {
    if input.iter().all(u8::is_ascii_whitespace) {
        return HookEvent::default();
    }
    serde_json::from_slice(input).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unparsable hook input, treating as prompt submission");
        HookEvent::default()
    })
}

/// Turn one raw event record into a response
pub(crate) fn respond(
    input: &[u8],
    forced: Option<HookEventKind>,
    interval: Option<u64>,
) -> anyhow::Result<HookResponse> {
    let mut event = parse_event(input);
    if event.cwd.as_os_str().is_empty() {
        event.cwd = std::env::current_dir().context("failed to resolve working directory")?;
    }

    let (config, config_error) = resolve_config(&event.cwd, interval);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "ignoring project config");
    }

    let kind = forced.unwrap_or_else(|| event.kind());
    Ok(handle(kind, &event, &config))
}

pub fn run(forced: Option<HookEventKind>, interval: Option<u64>) -> anyhow::Result<()> {
    let mut input = Vec::new();
    io::stdin()
        .take(MAX_INPUT_BYTES)
        .read_to_end(&mut input)
        .context("failed to read hook input")?;

    let response = respond(&input, forced, interval)?;

    let output_json = serde_json::to_string(&response)?;
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", output_json)?;
    stdout.flush()?;

    Ok(())
}
