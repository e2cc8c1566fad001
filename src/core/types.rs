//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Version`] - Validated `major.minor.patch` triple
//! - [`BumpTarget`] - Which component a version bump increments
//! - [`ChangeKind`] - Fixed taxonomy of changelog categories
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use caretaker::core::types::{ChangeKind, Version};
//!
//! let v = Version::parse("1.9.0").unwrap();
//! assert_eq!(v.to_string(), "1.9.0");
//!
//! let kind = ChangeKind::from_keyword("add").unwrap();
//! assert_eq!(kind.heading(), "Added");
//!
//! // Invalid constructions fail at creation time
//! assert!(Version::parse("1.9").is_err());
//! assert!(ChangeKind::from_keyword("added").is_err());
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid version '{0}': expected format X.Y.Z")]
    InvalidVersion(String),

    #[error("unrecognized change kind '{0}' (expected one of: add, fix, change, remove)")]
    UnknownChangeKind(String),
}

impl TypeError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// A semantic version triple.
///
/// Versions are exactly three dot-separated non-negative integers. No
/// pre-release or build suffixes: the tool rewrites version literals in
/// project files and the literals are always plain triples.
///
/// # Example
///
/// ```
/// use caretaker::core::types::{BumpTarget, Version};
///
/// let v = Version::parse("0.12.4").unwrap();
/// assert_eq!(v.bump(BumpTarget::Minor), Version::new(0, 13, 0));
///
/// assert!(Version::parse("").is_err());
/// assert!(Version::parse("1.2.3.4").is_err());
/// assert!(Version::parse("1.2.x").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a version from its components.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from `"X.Y.Z"` form.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidVersion` unless the input is exactly three
    /// dot-separated decimal integers.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(TypeError::InvalidVersion(s.to_string()));
        }

        let mut nums = [0u32; 3];
        for (slot, part) in nums.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| TypeError::InvalidVersion(s.to_string()))?;
        }

        Ok(Self::new(nums[0], nums[1], nums[2]))
    }

    /// Return the version with the given component bumped.
    ///
    /// Bumping a component resets every lower component to zero.
    pub fn bump(self, target: BumpTarget) -> Self {
        match target {
            BumpTarget::Major => Self::new(self.major + 1, 0, 0),
            BumpTarget::Minor => Self::new(self.major, self.minor + 1, 0),
            BumpTarget::Patch => Self::new(self.major, self.minor, self.patch + 1),
        }
    }
}

impl TryFrom<String> for Version {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component of a version a bump targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpTarget {
    Major,
    Minor,
    Patch,
}

/// The fixed taxonomy of changelog categories.
///
/// Each kind pairs a CLI keyword with the display heading used inside
/// changelog sections.
///
/// # Example
///
/// ```
/// use caretaker::core::types::ChangeKind;
///
/// assert_eq!(ChangeKind::Fix.keyword(), "fix");
/// assert_eq!(ChangeKind::Fix.heading(), "Fixed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Add,
    Fix,
    Change,
    Remove,
}

impl ChangeKind {
    /// All kinds, in canonical order.
    pub const ALL: [ChangeKind; 4] = [
        ChangeKind::Add,
        ChangeKind::Fix,
        ChangeKind::Change,
        ChangeKind::Remove,
    ];

    /// The CLI keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            ChangeKind::Add => "add",
            ChangeKind::Fix => "fix",
            ChangeKind::Change => "change",
            ChangeKind::Remove => "remove",
        }
    }

    /// The display heading used under a changelog section.
    pub fn heading(self) -> &'static str {
        match self {
            ChangeKind::Add => "Added",
            ChangeKind::Fix => "Fixed",
            ChangeKind::Change => "Changed",
            ChangeKind::Remove => "Removed",
        }
    }

    /// Resolve a keyword to its kind.
    ///
    /// Fails fast before any file I/O is attempted, so an unrecognized
    /// keyword never mutates the changelog.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::UnknownChangeKind` for anything outside the
    /// fixed taxonomy. Matching is exact: no case folding, no aliases.
    pub fn from_keyword(keyword: &str) -> Result<Self, TypeError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword() == keyword)
            .ok_or_else(|| TypeError::UnknownChangeKind(keyword.to_string()))
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
