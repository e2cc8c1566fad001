//! core::headers
//!
//! Source-file header normalization.
//!
//! # Overview
//!
//! Every source file in the library starts with the same license banner, and
//! header files additionally carry `#pragma once` directly below it. This
//! module walks the project tree, flags files that violate either rule, and
//! can rewrite them in place: expected banner first, then the pragma for
//! header files, then a single blank line, then the original content with
//! any recognized stale banner and leading blank lines stripped.
//!
//! Files are classified by extension; everything outside the configured
//! extensions is ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors from header scanning and rewriting.
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to walk project tree: {0}")]
    Walk(#[from] walkdir::Error),
}

impl HeaderError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        4
    }
}

/// What the project expects at the top of each source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
    /// The banner text, without a trailing newline.
    pub text: String,
    /// Extensions of header files (checked for `#pragma once`).
    pub header_exts: Vec<String>,
    /// Extensions of other source files.
    pub source_exts: Vec<String>,
}

impl HeaderSpec {
    /// The banner as individual lines.
    fn banner(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// Classify a path by extension, if it is covered by this spec.
    pub fn classify(&self, path: &Path) -> Option<FileRole> {
        let ext = path.extension()?.to_str()?;
        if self.header_exts.iter().any(|e| e == ext) {
            Some(FileRole::Header)
        } else if self.source_exts.iter().any(|e| e == ext) {
            Some(FileRole::Source)
        } else {
            None
        }
    }
}

/// Whether a file is a header (pragma required) or plain source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileRole {
    Header,
    Source,
}

/// A rule violation found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub path: PathBuf,
    pub role: FileRole,
    pub kind: FindingKind,
}

/// The specific rule a file violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    MissingHeader,
    MissingPragmaOnce,
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::MissingHeader => write!(f, "invalid or missing header"),
            FindingKind::MissingPragmaOnce => write!(f, "missing #pragma once"),
        }
    }
}

fn starts_with_banner(lines: &[String], banner: &[&str]) -> bool {
    lines.len() >= banner.len() && lines.iter().zip(banner).all(|(line, want)| line == want)
}

fn has_pragma_after(lines: &[String], banner_len: usize) -> bool {
    lines
        .get(banner_len)
        .is_some_and(|line| line.trim() == "#pragma once")
}

/// Check one file's lines against the spec.
pub fn check_lines(lines: &[String], spec: &HeaderSpec, role: FileRole) -> Option<FindingKind> {
    let banner = spec.banner();
    if !starts_with_banner(lines, &banner) {
        return Some(FindingKind::MissingHeader);
    }
    if role == FileRole::Header && !has_pragma_after(lines, banner.len()) {
        return Some(FindingKind::MissingPragmaOnce);
    }
    None
}

/// Produce the normalized content for a file.
pub fn fix_lines(lines: &[String], spec: &HeaderSpec, role: FileRole) -> Vec<String> {
    let banner = spec.banner();

    // Determine where real content starts: skip a recognized banner, its
    // pragma for header files, and any leading blank lines.
    let mut start = 0;
    if starts_with_banner(lines, &banner) {
        start = banner.len();
        if role == FileRole::Header && has_pragma_after(lines, banner.len()) {
            start += 1;
        }
    }
    while start < lines.len() && lines[start].trim().is_empty() {
        start += 1;
    }

    let mut out: Vec<String> = banner.iter().map(|s| s.to_string()).collect();
    if role == FileRole::Header {
        out.push("#pragma once".to_string());
    }
    out.push(String::new());
    out.extend(lines[start..].iter().cloned());
    out
}

/// Read a file as lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, HeaderError> {
    let content = fs::read_to_string(path).map_err(|source| HeaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Write lines back, joined with `\n` and one trailing newline.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), HeaderError> {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).map_err(|source| HeaderError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Walk the tree under `root` and collect the files the spec covers.
///
/// Hidden directories (`.git` and friends) are skipped.
pub fn collect_files(root: &Path, spec: &HeaderSpec) -> Result<Vec<(PathBuf, FileRole)>, HeaderError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        let hidden = entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.starts_with('.') && name != ".");
        !(entry.file_type().is_dir() && hidden)
    });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(role) = spec.classify(entry.path()) {
            files.push((entry.path().to_path_buf(), role));
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> HeaderSpec {
        HeaderSpec {
            text: "// Vast Library\n// Licensed under GNU GPL v3 License. See LICENSE file.\n// (C) 2025 VaLibTeam".to_string(),
            header_exts: vec!["hpp".into()],
            source_exts: vec!["cpp".into()],
        }
    }

    fn lines(content: &str) -> Vec<String> {
        content.lines().map(str::to_string).collect()
    }

    mod classify {
        use super::*;

        #[test]
        fn by_extension() {
            let s = spec();
            assert_eq!(s.classify(Path::new("a/b.hpp")), Some(FileRole::Header));
            assert_eq!(s.classify(Path::new("a/b.cpp")), Some(FileRole::Source));
            assert_eq!(s.classify(Path::new("a/b.md")), None);
            assert_eq!(s.classify(Path::new("Makefile")), None);
        }
    }

    mod check {
        use super::*;

        #[test]
        fn valid_header_file_passes() {
            let content = format!("{}\n#pragma once\n\nint x;\n", spec().text);
            assert_eq!(
                check_lines(&lines(&content), &spec(), FileRole::Header),
                None
            );
        }

        #[test]
        fn valid_source_file_needs_no_pragma() {
            let content = format!("{}\n\nint x;\n", spec().text);
            assert_eq!(
                check_lines(&lines(&content), &spec(), FileRole::Source),
                None
            );
        }

        #[test]
        fn missing_banner_flagged() {
            assert_eq!(
                check_lines(&lines("int x;\n"), &spec(), FileRole::Source),
                Some(FindingKind::MissingHeader)
            );
        }

        #[test]
        fn file_shorter_than_banner_flagged() {
            assert_eq!(
                check_lines(&lines("// Vast Library\n"), &spec(), FileRole::Header),
                Some(FindingKind::MissingHeader)
            );
        }

        #[test]
        fn header_without_pragma_flagged() {
            let content = format!("{}\n\nint x;\n", spec().text);
            assert_eq!(
                check_lines(&lines(&content), &spec(), FileRole::Header),
                Some(FindingKind::MissingPragmaOnce)
            );
        }
    }

    mod fix {
        use super::*;

        #[test]
        fn adds_banner_and_pragma_to_bare_header() {
            let fixed = fix_lines(&lines("int x;"), &spec(), FileRole::Header);
            let expected = format!("{}\n#pragma once\n\nint x", spec().text);
            assert_eq!(fixed.join("\n"), expected);
        }

        #[test]
        fn adds_banner_only_to_bare_source() {
            let fixed = fix_lines(&lines("int x;"), &spec(), FileRole::Source);
            assert!(fixed.join("\n").starts_with(&spec().text));
            assert!(!fixed.join("\n").contains("#pragma once"));
        }

        #[test]
        fn inserts_missing_pragma_under_existing_banner() {
            let content = format!("{}\n\nint x;", spec().text);
            let fixed = fix_lines(&lines(&content), &spec(), FileRole::Header);
            let expected = format!("{}\n#pragma once\n\nint x;", spec().text);
            assert_eq!(fixed.join("\n"), expected);
        }

        #[test]
        fn idempotent_on_already_fixed_file() {
            let fixed = fix_lines(&lines("int x;"), &spec(), FileRole::Header);
            let again = fix_lines(&fixed, &spec(), FileRole::Header);
            assert_eq!(fixed, again);
        }

        #[test]
        fn collapses_extra_leading_blanks() {
            let content = format!("{}\n#pragma once\n\n\n\nint x;", spec().text);
            let fixed = fix_lines(&lines(&content), &spec(), FileRole::Header);
            let expected = format!("{}\n#pragma once\n\nint x;", spec().text);
            assert_eq!(fixed.join("\n"), expected);
        }

        #[test]
        fn empty_file_gets_banner() {
            let fixed = fix_lines(&[], &spec(), FileRole::Source);
            let expected = format!("{}\n", spec().text);
            assert_eq!(fixed.join("\n"), expected);
        }
    }

    mod walk {
        use super::*;
        use tempfile::TempDir;

        #[test]
        fn collects_covered_files_and_skips_hidden_dirs() {
            let dir = TempDir::new().unwrap();
            fs::create_dir_all(dir.path().join("Include")).unwrap();
            fs::create_dir_all(dir.path().join(".git")).unwrap();
            fs::write(dir.path().join("Include/a.hpp"), "x").unwrap();
            fs::write(dir.path().join("b.cpp"), "x").unwrap();
            fs::write(dir.path().join("notes.md"), "x").unwrap();
            fs::write(dir.path().join(".git/c.hpp"), "x").unwrap();

            let files = collect_files(dir.path(), &spec()).unwrap();
            let names: Vec<_> = files
                .iter()
                .map(|(p, _)| p.strip_prefix(dir.path()).unwrap().to_path_buf())
                .collect();

            assert_eq!(
                names,
                vec![PathBuf::from("Include/a.hpp"), PathBuf::from("b.cpp")]
            );
            assert_eq!(files[0].1, FileRole::Header);
            assert_eq!(files[1].1, FileRole::Source);
        }
    }
}
