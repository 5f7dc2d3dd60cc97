// src/main.rs
// tongyeok - Korean-English translator preface hook for Claude Code

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "tongyeok")]
#[command(about = "Korean-English translator preface hook for Claude Code")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Claude Code hook handlers
    Hook {
        #[command(subcommand)]
        action: HookAction,
    },
}

#[derive(Subcommand)]
enum HookAction {
    /// Handle UserPromptSubmit hooks - prepend the translator preface
    UserPrompt,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Quiet for hook stdio - diagnostics go to stderr, never stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Bare invocation runs the hook: Claude Code calls this binary with no
    // arguments and pipes the hook payload through stdin.
    let result = match cli.command {
        None
        | Some(Commands::Hook {
            action: HookAction::UserPrompt,
        }) => tongyeok::hooks::user_prompt::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
