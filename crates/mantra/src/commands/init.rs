use anyhow::Context;
use serde_json::Value;
use std::path::Path;

/// Starter context files, embedded at build time
const CONTEXT_TEMPLATES: &[(&str, &str)] = &[
    ("behavior.md", include_str!("../../templates/context/behavior.md")),
    ("behavior.yml", include_str!("../../templates/context/behavior.yml")),
    ("git.md", include_str!("../../templates/context/git.md")),
    ("git.yml", include_str!("../../templates/context/git.yml")),
    ("project.md", include_str!("../../templates/context/project.md")),
    ("project.yml", include_str!("../../templates/context/project.yml")),
    ("testing.md", include_str!("../../templates/context/testing.md")),
    ("testing.yml", include_str!("../../templates/context/testing.yml")),
];

const HOOK_COMMAND: &str = "mantra hook";
const HOOK_EVENTS: &[&str] = &["SessionStart", "UserPromptSubmit"];

#[derive(Debug, Default)]
pub(crate) struct InitReport {
    pub already_initialized: bool,
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

pub fn run(force: bool, dir: Option<&Path>) -> anyhow::Result<()> {
    let root = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir()?,
    };

    println!("Initializing mantra...\n");
    let report = install(&root, force)?;

    if report.already_initialized && !force {
        println!("⚠️  .claude/ directory already exists.");
        println!("   Existing files will NOT be overwritten without --force.\n");
    }
    for name in &report.created {
        println!("   ✅ {}", name);
    }
    for name in &report.skipped {
        println!("   ⏭️  {} (exists, skipped)", name);
    }

    println!("\n---");
    println!(
        "✨ Done! {} files created, {} skipped.",
        report.created.len(),
        report.skipped.len()
    );
    println!("\nNext steps:");
    println!("  1. Customize .claude/context/*.yml files for your project");
    println!("  2. Update companion .md files with detailed examples");
    println!("  3. Restart Claude Code to activate the hook");

    Ok(())
}

pub(crate) fn install(root: &Path, force: bool) -> anyhow::Result<InitReport> {
    let claude_dir = root.join(".claude");
    let context_dir = claude_dir.join("context");

    let mut report = InitReport {
        already_initialized: claude_dir.exists(),
        ..Default::default()
    };

    std::fs::create_dir_all(&context_dir)
        .with_context(|| format!("failed to create {}", context_dir.display()))?;

    for (name, content) in CONTEXT_TEMPLATES {
        let dest = context_dir.join(name);
        let label = format!("context/{}", name);
        if dest.exists() && !force {
            report.skipped.push(label);
            continue;
        }
        std::fs::write(&dest, content)
            .with_context(|| format!("failed to write {}", dest.display()))?;
        report.created.push(label);
    }

    let settings_path = claude_dir.join("settings.json");
    if register_hooks(&settings_path)? {
        report.created.push("settings.json (hooks)".to_string());
    } else {
        report.skipped.push("settings.json (hooks)".to_string());
    }

    Ok(report)
}

/// Merge hook entries into settings.json; false if nothing changed
fn register_hooks(settings_path: &Path) -> anyhow::Result<bool> {
    let mut settings: Value = if settings_path.exists() {
        let content = std::fs::read_to_string(settings_path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("{} is not valid JSON", settings_path.display()))?
    } else {
        serde_json::json!({})
    };

    if settings.get("hooks").is_none() {
        settings["hooks"] = serde_json::json!({});
    }

    let mut changed = false;
    for event_name in HOOK_EVENTS {
        changed |= add_hook_if_missing(&mut settings, event_name, HOOK_COMMAND)?;
    }

    if changed {
        let json = serde_json::to_string_pretty(&settings)?;
        mantra_store::atomic_write(settings_path, json.as_bytes())?;
    }

    Ok(changed)
}

fn is_mantra_command(command: &str) -> bool {
    command == "mantra" || command.starts_with("mantra ")
}

fn add_hook_if_missing(
    settings: &mut Value,
    event_name: &str,
    command: &str,
) -> anyhow::Result<bool> {
    let hooks = settings
        .get_mut("hooks")
        .and_then(|h| h.as_object_mut())
        .ok_or_else(|| anyhow::anyhow!("hooks is not an object"))?;

    let event_array = hooks
        .entry(event_name)
        .or_insert_with(|| serde_json::json!([]));

    let event_groups = event_array
        .as_array_mut()
        .ok_or_else(|| anyhow::anyhow!("event {} is not an array", event_name))?;

    let already_exists = event_groups.iter().any(|group| {
        group
            .get("hooks")
            .and_then(|h| h.as_array())
            .map(|hooks_array| {
                hooks_array.iter().any(|hook| {
                    hook.get("command")
                        .and_then(|c| c.as_str())
                        .map(is_mantra_command)
                        .unwrap_or(false)
                })
            })
            .unwrap_or(false)
    });

    if already_exists {
        return Ok(false);
    }

    event_groups.push(serde_json::json!({
        "matcher": "",
        "hooks": [
            {
                "type": "command",
                "command": command
            }
        ]
    }));
    Ok(true)
}
