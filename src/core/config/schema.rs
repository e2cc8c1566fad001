//! core::config::schema
//!
//! Configuration schema with serde defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::headers::HeaderSpec;
use crate::core::types::Version;
use crate::core::version::PatchRule;

/// Project configuration (`caretaker.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Current release version; the changelog section target and the value
    /// written into configured version files.
    #[serde(default = "default_version")]
    pub version: Version,

    /// Recognized library module names. Entries tagged with one of these get
    /// square brackets in the changelog; anything else gets parentheses.
    #[serde(default = "default_modules")]
    pub modules: Vec<String>,

    /// Changelog path, relative to the project root.
    #[serde(default = "default_changelog")]
    pub changelog: PathBuf,

    /// Expected source-file header.
    #[serde(default)]
    pub header: HeaderConfig,

    /// Files whose embedded version literals `ct version` rewrites.
    #[serde(default, rename = "version_file")]
    pub version_files: Vec<VersionFileConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            modules: default_modules(),
            changelog: default_changelog(),
            header: HeaderConfig::default(),
            version_files: Vec::new(),
        }
    }
}

impl Config {
    /// The header section as the spec type the headers module consumes.
    pub fn header_spec(&self) -> HeaderSpec {
        HeaderSpec {
            text: self.header.text.clone(),
            header_exts: self.header.header_extensions.clone(),
            source_exts: self.header.source_extensions.clone(),
        }
    }
}

/// `[header]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Banner text expected at the top of every covered file.
    #[serde(default = "default_header_text")]
    pub text: String,

    /// Extensions of header files (additionally require `#pragma once`).
    #[serde(default = "default_header_extensions")]
    pub header_extensions: Vec<String>,

    /// Extensions of other source files.
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            text: default_header_text(),
            header_extensions: default_header_extensions(),
            source_extensions: default_source_extensions(),
        }
    }
}

/// One `[[version_file]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionFileConfig {
    /// File path, relative to the project root.
    pub path: PathBuf,

    /// Rewrite rules applied to the file, in order.
    pub rules: Vec<PatchRule>,
}

fn default_version() -> Version {
    Version::new(0, 1, 0)
}

fn default_modules() -> Vec<String> {
    vec!["Types".into(), "Utils".into(), "FuncTools".into()]
}

fn default_changelog() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

fn default_header_text() -> String {
    "// VaLib - Vast Library\n\
     // Licensed under GNU GPL v3 License. See LICENSE file.\n\
     // (C) 2025 VaLibTeam"
        .to_string()
}

fn default_header_extensions() -> Vec<String> {
    vec!["hpp".into()]
}

fn default_source_extensions() -> Vec<String> {
    vec!["cpp".into()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header_spec_covers_cpp_and_hpp() {
        let spec = Config::default().header_spec();
        assert_eq!(spec.header_exts, vec!["hpp"]);
        assert_eq!(spec.source_exts, vec!["cpp"]);
        assert!(spec.text.starts_with("// VaLib"));
        assert!(!spec.text.ends_with('\n'));
    }

    #[test]
    fn config_serializes_back_to_toml() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }
}
