//! ui::editor
//!
//! Composing a changelog message in the user's editor.
//!
//! # Design
//!
//! The message is composed in a temporary file: spawn the configured editor
//! on it, wait, read the result back. The temp file is removed when the
//! function returns, on every path. An empty (or whitespace-only) result
//! means the user backed out, and nothing downstream is mutated.

use std::env;
use std::fs;
use std::io;
use std::process::Command;

use thiserror::Error;

/// Fallback when `$EDITOR` is unset.
const DEFAULT_EDITOR: &str = "nvim";

/// Errors from editor invocation.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no message provided, aborting")]
    Aborted,

    #[error("failed to launch editor '{editor}': {source}")]
    Launch { editor: String, source: io::Error },

    #[error("editor '{editor}' exited with failure")]
    Exited { editor: String },

    #[error("failed to prepare message buffer: {0}")]
    Buffer(#[from] io::Error),
}

impl EditorError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            EditorError::Aborted => 3,
            _ => 1,
        }
    }
}

/// Resolve the editor command: `$EDITOR`, else the default.
pub fn default_editor() -> String {
    env::var("EDITOR")
        .ok()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Open the editor on a scratch buffer and return the composed message.
///
/// The editor command may carry leading arguments (`"code --wait"`); the
/// buffer path is appended last. The returned message is trimmed.
///
/// # Errors
///
/// - `EditorError::Aborted` when the user leaves the buffer empty
/// - `EditorError::Launch` / `EditorError::Exited` when the editor cannot
///   run or reports failure
pub fn compose_message(editor: &str) -> Result<String, EditorError> {
    let buffer = tempfile::Builder::new()
        .prefix(".changelog-message-")
        .suffix(".md")
        .tempfile()?;

    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or_else(|| EditorError::Launch {
        editor: editor.to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "empty editor command"),
    })?;

    let status = Command::new(program)
        .args(parts)
        .arg(buffer.path())
        .status()
        .map_err(|source| EditorError::Launch {
            editor: editor.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(EditorError::Exited {
            editor: editor.to_string(),
        });
    }

    let message = fs::read_to_string(buffer.path())?.trim().to_string();
    if message.is_empty() {
        return Err(EditorError::Aborted);
    }
    Ok(message)
}
