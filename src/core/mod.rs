//! core
//!
//! Domain logic for caretaker.
//!
//! # Modules
//!
//! - [`types`] - Strong types: version triples, change kinds, bump targets
//! - [`changelog`] - The changelog document model and merge engine
//! - [`version`] - Regex-based version rewriting in project files
//! - [`headers`] - Source-file header and pragma checks
//! - [`config`] - Project configuration (`caretaker.toml`)
//!
//! # Design
//!
//! Core modules perform no console output except where a [`crate::ui::Console`]
//! is passed in explicitly. All fallible operations return typed errors;
//! the CLI layer adds context and maps error kinds to exit codes.

pub mod changelog;
pub mod config;
pub mod headers;
pub mod types;
pub mod version;
