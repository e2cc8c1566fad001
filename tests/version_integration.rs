//! Integration tests for the version command.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use caretaker::cli::{commands, Context};
use caretaker::core::types::BumpTarget;
use caretaker::ui::ColorMode;

struct TestProject {
    dir: TempDir,
}

impl TestProject {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn context(&self) -> Context {
        Context {
            cwd: Some(self.path().to_path_buf()),
            quiet: true,
            color: ColorMode::Never,
        }
    }

    fn write(&self, name: &str, content: &str) {
        fs::write(self.path().join(name), content).unwrap();
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).unwrap()
    }
}

/// Config wiring a version header file the way the library lays it out.
const CONFIG: &str = r#"
version = "1.8.4"

[[version_file]]
path = "Version.hpp"
rules = [
    { pattern = '^(#define\s+VaLib_VERSION_MAJOR\s+)\d+', replace = "{major}" },
    { pattern = '^(#define\s+VaLib_VERSION_MINOR\s+)\d+', replace = "{minor}" },
    { pattern = '^(#define\s+VaLib_VERSION_PATCH\s+)\d+', replace = "{patch}" },
]
"#;

const VERSION_HPP: &str = "\
#pragma once

#define VaLib_VERSION_MAJOR 1
#define VaLib_VERSION_MINOR 8
#define VaLib_VERSION_PATCH 4
";

#[test]
fn set_rewrites_config_and_version_files() {
    let project = TestProject::new();
    project.write("caretaker.toml", CONFIG);
    project.write("Version.hpp", VERSION_HPP);

    commands::version_set(&project.context(), "2.0.0").unwrap();

    assert!(project.read("caretaker.toml").contains("version = \"2.0.0\""));
    let hpp = project.read("Version.hpp");
    assert!(hpp.contains("#define VaLib_VERSION_MAJOR 2"));
    assert!(hpp.contains("#define VaLib_VERSION_MINOR 0"));
    assert!(hpp.contains("#define VaLib_VERSION_PATCH 0"));
    // Unrelated lines untouched.
    assert!(hpp.starts_with("#pragma once"));
}

#[test]
fn bump_minor_resets_patch() {
    let project = TestProject::new();
    project.write("caretaker.toml", CONFIG);
    project.write("Version.hpp", VERSION_HPP);

    commands::version_bump(&project.context(), BumpTarget::Minor).unwrap();

    assert!(project.read("caretaker.toml").contains("version = \"1.9.0\""));
    assert!(project.read("Version.hpp").contains("#define VaLib_VERSION_MINOR 9"));
}

#[test]
fn invalid_version_string_is_a_usage_error() {
    let project = TestProject::new();
    project.write("caretaker.toml", CONFIG);

    let err = commands::version_set(&project.context(), "2.0").unwrap_err();
    assert_eq!(caretaker::cli::exit_code(&err), 2);
    // Nothing rewritten.
    assert!(project.read("caretaker.toml").contains("version = \"1.8.4\""));
}

#[test]
fn missing_version_file_is_an_io_error() {
    let project = TestProject::new();
    project.write("caretaker.toml", CONFIG);
    // Version.hpp intentionally absent.

    let err = commands::version_set(&project.context(), "2.0.0").unwrap_err();
    assert_eq!(caretaker::cli::exit_code(&err), 4);
}

#[test]
fn set_without_config_seeds_one() {
    let project = TestProject::new();

    commands::version_set(&project.context(), "3.1.4").unwrap();

    let config = project.read("caretaker.toml");
    assert!(config.contains("version = \"3.1.4\""));
}
