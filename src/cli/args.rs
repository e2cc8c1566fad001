//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--quiet` / `-q`: Minimal output
//! - `--color <auto|always|never>`: Color behavior

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::core::types::BumpTarget;
use crate::ui::ColorMode;

/// Caretaker - project-maintenance CLI for a source library
#[derive(Parser, Debug)]
#[command(name = "ct")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if caretaker was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Minimal output; errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// When to color output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Shared arguments of the four changelog-entry commands.
#[derive(Args, Debug)]
pub struct EntryArgs {
    /// Module the change belongs to
    pub module: String,

    /// Files touched by the change, appended to the module tag
    pub files: Vec<String>,

    /// Changelog message; skips opening the editor
    #[arg(short, long)]
    pub message: Option<String>,

    /// Update the changelog but skip `git add` / `git commit`
    #[arg(long)]
    pub no_commit: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record an addition in the changelog
    #[command(
        name = "add",
        long_about = "Record an addition in the changelog.\n\n\
            Opens your editor (or takes --message) for the entry text, files it \
            under the current version's '### Added' block, then stages and \
            commits the result. The changelog is created if it does not exist.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Record a new feature in the Types module, composing the message in $EDITOR
    ct add Types

    # Name the files touched; they are appended to the module tag
    ct add Utils sort.hpp iter.hpp

    # Non-interactive: message on the command line, no commit
    ct add Utils -m \"support stable sorting\" --no-commit"
    )]
    Add(EntryArgs),

    /// Record a fix in the changelog
    Fix(EntryArgs),

    /// Record a behavior change in the changelog
    Change(EntryArgs),

    /// Record a removal in the changelog
    Remove(EntryArgs),

    /// Show or rewrite the project version
    #[command(
        long_about = "Show or rewrite the project version.\n\n\
            'set' and 'bump' rewrite the version literal in caretaker.toml and \
            in every [[version_file]] entry via its configured patterns. A \
            pattern that matches nothing leaves its file unchanged and prints \
            a notice, since that usually means the pattern has drifted.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Print the current version
    ct version show

    # Release a new minor version
    ct version bump minor

    # Jump to an explicit version
    ct version set 2.0.0"
    )]
    Version {
        #[command(subcommand)]
        action: VersionAction,
    },

    /// Check source-file headers, optionally fixing them
    #[command(
        long_about = "Check that every source file starts with the expected \
            header block and that header files carry '#pragma once' below it.\n\n\
            Without flags, violations are reported as warnings. With --fix, \
            offending files are rewritten in place. With --list, findings are \
            printed as JSON for scripting."
    )]
    Headers {
        /// Rewrite offending files in place
        #[arg(long)]
        fix: bool,

        /// Print findings as JSON instead of warnings
        #[arg(long, conflicts_with = "fix")]
        list: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Version subcommand actions.
#[derive(Subcommand, Debug)]
pub enum VersionAction {
    /// Print the current version
    Show,

    /// Set an explicit version (format X.Y.Z)
    Set {
        /// The new version
        version: String,
    },

    /// Increment one version component, resetting the lower ones
    Bump {
        /// Which component to bump
        #[arg(value_enum)]
        target: BumpTarget,
    },
}
