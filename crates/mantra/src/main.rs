mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use mantra_core::HookEventKind;

fn main() -> anyhow::Result<()> {
    // Stdout carries the hook response, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("MANTRA_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force, dir } => commands::init::run(force, dir.as_deref()),
        Commands::Status { dir, interval } => commands::status::run(dir.as_deref(), interval),
        Commands::Version => commands::version::run(),
        Commands::Hook { interval } => commands::hooks::run(None, interval),
        Commands::HookUserPromptSubmit { interval } => {
            commands::hooks::run(Some(HookEventKind::UserPromptSubmit), interval)
        }
        Commands::HookSessionStart { interval } => {
            commands::hooks::run(Some(HookEventKind::SessionStart), interval)
        }
    }
}
