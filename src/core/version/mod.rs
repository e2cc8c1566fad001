//! core::version
//!
//! Regex-based rewriting of version literals embedded in project files.
//!
//! # Design
//!
//! Each configured file carries a list of [`PatchRule`]s. A rule's pattern
//! is applied in multi-line mode; capture group 1 is the preserved prefix
//! (everything up to the literal), and the replacement template supplies the
//! new literal with `{version}`, `{major}`, `{minor}` and `{patch}`
//! placeholders. This keeps the rules independent of the changelog: the two
//! responsibilities share nothing beyond the version triple itself.
//!
//! A rule that matches nothing leaves the file unchanged; the caller reports
//! that as an informational notice, since it usually means the pattern has
//! drifted from the file's contents.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Version;

/// Errors from version patching.
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("version file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid version pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}

impl VersionError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            VersionError::Pattern { .. } => 2,
            _ => 4,
        }
    }
}

/// One rewrite rule: a pattern whose first capture group is kept as prefix,
/// and a template for the new version literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchRule {
    pub pattern: String,
    pub replace: String,
}

impl PatchRule {
    pub fn new(pattern: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replace: replace.into(),
        }
    }
}

/// The built-in rule that keeps `caretaker.toml`'s own `version` key in sync.
pub fn config_rule() -> PatchRule {
    PatchRule::new(r#"^(\s*version\s*=\s*)"\d+\.\d+\.\d+""#, r#""{version}""#)
}

/// Render a replacement template for a version.
fn render_template(template: &str, version: Version) -> String {
    template
        .replace("{version}", &version.to_string())
        .replace("{major}", &version.major.to_string())
        .replace("{minor}", &version.minor.to_string())
        .replace("{patch}", &version.patch.to_string())
}

/// Apply rules to file content, returning the result and whether anything
/// changed.
pub fn apply_rules(
    content: &str,
    rules: &[PatchRule],
    version: Version,
) -> Result<(String, bool), VersionError> {
    let mut current = content.to_string();

    for rule in rules {
        let regex = RegexBuilder::new(&rule.pattern)
            .multi_line(true)
            .build()
            .map_err(|source| VersionError::Pattern {
                pattern: rule.pattern.clone(),
                source,
            })?;

        let literal = render_template(&rule.replace, version);
        current = regex
            .replace_all(&current, |caps: &regex::Captures<'_>| {
                let prefix = caps.get(1).map_or("", |m| m.as_str());
                format!("{prefix}{literal}")
            })
            .into_owned();
    }

    let changed = current != content;
    Ok((current, changed))
}

/// Rewrite the version literals in one file.
///
/// Returns whether the file content changed. A missing file is an error:
/// the rule list names files the project claims to have.
pub fn patch_file(path: &Path, rules: &[PatchRule], version: Version) -> Result<bool, VersionError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            VersionError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            VersionError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let (patched, changed) = apply_rules(&content, rules, version)?;

    fs::write(path, patched).map_err(|source| VersionError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(changed)
}
