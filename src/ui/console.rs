//! ui::console
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag. Every
//! message carries a bracketed severity prefix so runs read well both in a
//! terminal and in captured CI logs. Color behavior is an explicit
//! configuration value handed to the console at construction.

use std::fmt::Display;

use clap::ValueEnum;
use colored::control;
use colored::Colorize;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - errors only
    Quiet,
    /// Normal mode - standard output
    Normal,
}

impl Verbosity {
    /// Create verbosity from the `--quiet` flag.
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

/// When to emit ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

/// Console for status output.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    verbosity: Verbosity,
}

impl Console {
    /// Create a console with the given verbosity and color mode.
    pub fn new(verbosity: Verbosity, color: ColorMode) -> Self {
        match color {
            ColorMode::Always => control::set_override(true),
            ColorMode::Never => control::set_override(false),
            ColorMode::Auto => control::unset_override(),
        }
        Self { verbosity }
    }

    fn chatty(&self) -> bool {
        self.verbosity != Verbosity::Quiet
    }

    /// Print an error message (always shown).
    pub fn error(&self, message: impl Display) {
        eprintln!(
            "{} {}",
            "[ ERROR ]:".red().bold(),
            message.to_string().bright_red()
        );
    }

    /// Print a warning message (respects quiet mode).
    pub fn warn(&self, message: impl Display) {
        if self.chatty() {
            eprintln!(
                "{} {}",
                "[ WARNING ]:".yellow().bold(),
                message.to_string().bright_yellow()
            );
        }
    }

    /// Print a success message (respects quiet mode).
    pub fn success(&self, message: impl Display) {
        if self.chatty() {
            println!(
                "{} {}",
                "[ SUCCESS ]:".green().bold(),
                message.to_string().bright_green()
            );
        }
    }

    /// Print an informational message (respects quiet mode).
    pub fn info(&self, message: impl Display) {
        if self.chatty() {
            println!(
                "{} {}",
                "[ INFO ]:".blue().bold(),
                message.to_string().bright_blue()
            );
        }
    }

    /// Print a usage tip (respects quiet mode).
    pub fn tip(&self, message: impl Display) {
        if self.chatty() {
            println!(
                "{} {}",
                "[ TIP ]:".cyan().bold(),
                message.to_string().bright_cyan()
            );
        }
    }
}
