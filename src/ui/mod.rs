//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`console`] - Status-line output with explicit color configuration
//! - [`editor`] - Composing a changelog message in the user's editor
//!
//! # Design
//!
//! All console output goes through a [`Console`] constructed once from the
//! CLI flags, so verbosity and color behavior are decided in exactly one
//! place instead of by scattered module-level switches.

pub mod console;
pub mod editor;

pub use console::{ColorMode, Console, Verbosity};
