use super::hooks::resolve_config;
use mantra_core::ContextSource;
use mantra_store::load_state;
use std::path::Path;

pub fn run(dir: Option<&Path>, interval: Option<u64>) -> anyhow::Result<()> {
    let root = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir()?,
    };

    println!("{}", build_status(&root, interval));
    Ok(())
}

fn build_status(project_root: &Path, interval: Option<u64>) -> serde_json::Value {
    let (config, config_error) = resolve_config(project_root, interval);
    let state = load_state(&config.state_file);
    let source = ContextSource::resolve(project_root, &config);

    let mut output = serde_json::json!({
        "state_file": config.state_file,
        "count": state.count,
        "interval": config.refresh_interval,
        "context": source.kind(),
    });

    if let ContextSource::Files(sections) = &source {
        output["context_files"] = serde_json::json!(sections
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>());
    }
    if let Some(e) = config_error {
        output["config_error"] = serde_json::json!(e.to_string());
    }

    output
}
