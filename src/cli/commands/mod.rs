//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves the base directory and file paths (flags over config file)
//! 2. Calls the pipeline to do the work
//! 3. Formats and displays output
//!
//! Handlers do NOT parse register lines or render artifacts themselves.

mod build;
mod check;
mod completion;

// Re-export command functions for testing and direct invocation
pub use build::build;
pub use check::check;
pub use completion::completion;

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::args::Command;
use crate::ui::output::Verbosity;

/// Shared state every handler receives.
#[derive(Debug, Clone)]
pub struct Context {
    /// Base directory for the run; `None` means the current directory.
    pub dir: Option<PathBuf>,
    /// Output verbosity from the global flags.
    pub verbosity: Verbosity,
}

impl Context {
    /// The directory paths resolve against.
    pub fn base_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Build {
            input,
            json,
            html,
            report,
        } => build::build(ctx, input, json, html, report),
        Command::Check { input, json } => check::check(ctx, input, json),
        Command::Completion { shell } => completion::completion(shell),
    }
}
