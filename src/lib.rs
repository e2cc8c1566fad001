//! Caretaker - project-maintenance CLI for a source library
//!
//! Caretaker is a single-binary tool for the repetitive chores of maintaining
//! a source library: recording structured changelog entries, keeping embedded
//! version literals in sync across project files, and normalizing source-file
//! license headers.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Domain types, changelog merge engine, version patching,
//!   header checks, and configuration
//! - [`git`] - Thin interface for the git staging/commit step
//! - [`ui`] - Console output and editor invocation
//!
//! # Correctness Invariants
//!
//! Caretaker maintains the following invariants:
//!
//! 1. A changelog section for one (version, date) pair is created at most
//!    once per run; later entries reuse it
//! 2. Changelog edits are minimal: unrelated lines are never touched
//! 3. The whole document is rewritten from an in-memory copy in one write
//!    call; there is no partial state on disk
//! 4. Nothing is written when the user aborts message composition

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
