//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Drives the core modules
//! 3. Formats and displays output through the context's console
//!
//! Handlers receive a [`Context`] and return `anyhow::Result`; typed core
//! errors pass through so `main` can map them to exit codes.

mod completion;
mod entry;
mod headers;
mod version_cmd;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use entry::record;
pub use headers::headers;
pub use version_cmd::{bump as version_bump, set as version_set, show as version_show};

use anyhow::Result;

use crate::cli::args::{Command, VersionAction};
use crate::cli::Context;
use crate::core::types::ChangeKind;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Add(args) => entry::record(ctx, ChangeKind::Add, &args),
        Command::Fix(args) => entry::record(ctx, ChangeKind::Fix, &args),
        Command::Change(args) => entry::record(ctx, ChangeKind::Change, &args),
        Command::Remove(args) => entry::record(ctx, ChangeKind::Remove, &args),

        Command::Version { action } => match action {
            VersionAction::Show => version_cmd::show(ctx),
            VersionAction::Set { version } => version_cmd::set(ctx, &version),
            VersionAction::Bump { target } => version_cmd::bump(ctx, target),
        },

        Command::Headers { fix, list } => headers::headers(ctx, fix, list),

        Command::Completion { shell } => completion::completion(shell),
    }
}
