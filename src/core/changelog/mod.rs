//! core::changelog
//!
//! The changelog merge engine and its supporting document model.
//!
//! # Overview
//!
//! The changelog is a semi-structured markdown document organized by release
//! section and change category:
//!
//! ```text
//! # Changelog
//!
//! ## [1.9.0] - 2025-01-01
//! ### Added
//! - **[ Utils ]** support X
//! ```
//!
//! This module edits that document without a markdown parser: the file is an
//! ordered sequence of lines, structure is recovered by cheap line scans, and
//! every merge performs a minimal edit that never touches unrelated content.
//!
//! # Modules
//!
//! - [`document`] - Ordered-line document with bounded structural views
//! - [`entry`] - Entry-line formatting (module tag selection)
//! - [`merge`] - The three-case insertion algorithm
//! - [`store`] - Reading and writing the changelog file
//!
//! # Invariants
//!
//! - At most one section per (version, date) pair is created per run; an
//!   existing section is reused, never duplicated
//! - New entries append after existing entries of the same category, in
//!   arrival order
//! - Identical messages are not deduplicated: messages are caller-supplied
//!   free text, and repeating one is taken at face value

pub mod document;
pub mod entry;
pub mod merge;
pub mod store;

pub use document::{Document, Section};
pub use entry::format_entry;
pub use merge::{merge, section_header, MergeRequest};
pub use store::{load_or_init, save, ChangelogError, TITLE_LINE};
