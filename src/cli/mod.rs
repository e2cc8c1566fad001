//! cli
//!
//! Command-line interface layer for caretaker.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Map typed error kinds to process exit codes
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that drive [`crate::core`]. Handlers receive a [`Context`] built
//! once from the global flags; color and verbosity decisions live there, not
//! in module-level state.

pub mod args;
pub mod commands;

pub use args::Cli;

use std::path::PathBuf;

use anyhow::Result;

use crate::core::changelog::ChangelogError;
use crate::core::config::ConfigError;
use crate::core::headers::HeaderError;
use crate::core::types::TypeError;
use crate::core::version::VersionError;
use crate::git::GitError;
use crate::ui::editor::EditorError;
use crate::ui::{ColorMode, Console, Verbosity};

/// Execution context built from the global CLI flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory to operate in; defaults to the process working directory.
    pub cwd: Option<PathBuf>,
    /// Minimal output.
    pub quiet: bool,
    /// Color behavior.
    pub color: ColorMode,
}

impl Context {
    /// The directory commands operate in.
    pub fn working_dir(&self) -> PathBuf {
        self.cwd
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Console configured from the context's flags.
    pub fn console(&self) -> Console {
        Console::new(Verbosity::from_quiet(self.quiet), self.color)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        quiet: cli.quiet,
        color: cli.color,
    };

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}

/// Choose the process exit code for a failed run.
///
/// Exit codes are chosen by the typed kind of the root error:
/// usage/taxonomy problems exit 2 (matching clap's own usage failures),
/// an aborted message exits 3, path-carrying I/O failures exit 4, and
/// anything else exits 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<TypeError>() {
        e.exit_code()
    } else if let Some(e) = err.downcast_ref::<EditorError>() {
        e.exit_code()
    } else if let Some(e) = err.downcast_ref::<ChangelogError>() {
        e.exit_code()
    } else if let Some(e) = err.downcast_ref::<VersionError>() {
        e.exit_code()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.exit_code()
    } else if let Some(e) = err.downcast_ref::<HeaderError>() {
        e.exit_code()
    } else if let Some(e) = err.downcast_ref::<GitError>() {
        e.exit_code()
    } else {
        1
    }
}
