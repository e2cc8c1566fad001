//! core::changelog::store
//!
//! Reading and writing the changelog file.
//!
//! # Design
//!
//! File absence is not an error: a missing changelog is created containing
//! only the title line before the first merge. All other I/O failures
//! surface with the path attached. The whole document is rewritten from the
//! in-memory copy in one write call - there is no partial state to recover.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::changelog::document::Document;

/// The fixed top-level title of a freshly created changelog.
pub const TITLE_LINE: &str = "# Changelog";

/// Errors from changelog persistence.
#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("failed to read changelog '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write changelog '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl ChangelogError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        4
    }
}

/// Load the changelog, creating it with the title line if absent.
pub fn load_or_init(path: &Path) -> Result<Document, ChangelogError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Document::parse(&content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let content = format!("{TITLE_LINE}\n");
            fs::write(path, &content).map_err(|source| ChangelogError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Document::parse(&content))
        }
        Err(source) => Err(ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write the document back in a single call.
pub fn save(path: &Path, doc: &Document) -> Result<(), ChangelogError> {
    fs::write(path, doc.render()).map_err(|source| ChangelogError::Write {
        path: path.to_path_buf(),
        source,
    })
}
