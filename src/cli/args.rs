//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--dir <path>`: Run against that directory instead of the current one
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kindred - turn a flat genealogy register into a browsable family tree
#[derive(Parser, Debug)]
#[command(name = "kin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base directory holding the register and receiving the artifacts
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the JSON, HTML, and report artifacts from the register
    #[command(
        name = "build",
        long_about = "Build all three artifacts from the register file.\n\n\
            Reads the flat register (one '<name> <id>' line per person), assembles \
            the family tree, and writes the JSON tree, the static HTML viewer page, \
            and the plain-text discrepancy report. Files that already exist are \
            overwritten.\n\n\
            Paths default to well-known names in the base directory and can be \
            overridden per file, either here or in a 'kindred.toml' next to the \
            register. Command-line flags win over the config file.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Build everything in the current directory
    kin build

    # Work against a different directory
    kin build --dir ~/genealogy

    # Use a register with a non-default name
    kin build --input register.txt

    # Route artifacts into a subdirectory
    kin build --json out/name_list.json --html out/index.html --report out/discrepancy.list

AFTER BUILDING:
    Open index.html in a browser (graph.js must sit next to it) or feed
    name_list.json to your own tooling."
    )]
    Build {
        /// Register file to read
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Where to write the JSON tree
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Where to write the HTML viewer page
        #[arg(long, value_name = "PATH")]
        html: Option<PathBuf>,

        /// Where to write the discrepancy report
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },

    /// Print the discrepancy report without writing any artifacts
    #[command(
        name = "check",
        long_about = "Check the register for missing child numbers without writing files.\n\n\
            Builds the tree in memory and prints the same discrepancy report that \
            'kin build' writes to disk. Use --json for a machine-readable summary \
            including the findings and line counters.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Inspect the register before committing to a build
    kin check

    # Check a specific register file
    kin check --input register.txt

    # Machine-readable output for scripting
    kin check --json | jq '.discrepancy_count'"
    )]
    Check {
        /// Register file to read
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Emit a machine-readable JSON summary instead of the report
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for Kindred commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    kin completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    kin completion zsh >> ~/.zshrc

    # Fish
    kin completion fish > ~/.config/fish/completions/kin.fish

    # PowerShell
    kin completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
