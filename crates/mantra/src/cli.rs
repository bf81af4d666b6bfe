use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mantra")]
#[command(version)]
#[command(about = "Periodic context refresh for Claude Code")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold context files and register hooks in a project
    Init {
        /// Overwrite existing context files
        #[arg(long)]
        force: bool,

        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Show counter and context status
    Status {
        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Override the refresh interval
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },

    /// Print version information
    Version,

    /// Hook: route by hook_event_name (stdin/stdout JSON)
    Hook {
        /// Override the refresh interval
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },

    /// Hook: count a prompt, refreshing context at the interval
    #[command(name = "hook:user-prompt-submit")]
    HookUserPromptSubmit {
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },

    /// Hook: reset the counter and refresh context
    #[command(name = "hook:session-start")]
    HookSessionStart {
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },
}
