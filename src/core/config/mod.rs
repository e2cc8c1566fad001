//! core::config
//!
//! Project configuration loading.
//!
//! # Overview
//!
//! Caretaker is configured per project by a `caretaker.toml` at the project
//! root. A missing file is not an error: every field has a default that
//! mirrors the tool's built-in conventions, so a project can start using the
//! changelog command without writing any configuration at all.
//!
//! # Example
//!
//! ```toml
//! version = "1.9.0"
//! modules = ["Types", "Utils", "FuncTools"]
//! changelog = "CHANGELOG.md"
//!
//! [header]
//! text = """
//! // VaLib - Vast Library
//! // Licensed under GNU GPL v3 License. See LICENSE file.
//! // (C) 2025 VaLibTeam"""
//! header_extensions = ["hpp"]
//! source_extensions = ["cpp"]
//!
//! [[version_file]]
//! path = "Include/VaLib/Version.hpp"
//! rules = [
//!     { pattern = '^(#define\s+VaLib_VERSION_MAJOR\s+)\d+', replace = "{major}" },
//!     { pattern = '^(#define\s+VaLib_VERSION_MINOR\s+)\d+', replace = "{minor}" },
//!     { pattern = '^(#define\s+VaLib_VERSION_PATCH\s+)\d+', replace = "{patch}" },
//! ]
//! ```

pub mod schema;

pub use schema::{Config, HeaderConfig, VersionFileConfig};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The configuration file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "caretaker.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

impl ConfigError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Read { .. } => 4,
            ConfigError::Parse { .. } => 2,
        }
    }
}

impl Config {
    /// Path of the config file under a project directory.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load configuration from `<dir>/caretaker.toml`.
    ///
    /// A missing file yields the defaults. Read and parse failures carry the
    /// offending path.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(dir);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        toml::from_str(&content).map_err(|err| ConfigError::Parse {
            path,
            message: err.to_string(),
        })
    }
}
