//! version command - Show or rewrite the project version

use anyhow::Result;

use crate::cli::Context;
use crate::core::config::Config;
use crate::core::types::{BumpTarget, Version};
use crate::core::version::{config_rule, patch_file};
use crate::ui::Console;

/// Print the current version.
pub fn show(ctx: &Context) -> Result<()> {
    let config = Config::load(&ctx.working_dir())?;
    println!("{}", config.version);
    Ok(())
}

/// Set an explicit version.
pub fn set(ctx: &Context, version: &str) -> Result<()> {
    let new_version = Version::parse(version)?;
    apply(ctx, new_version)
}

/// Bump one version component.
pub fn bump(ctx: &Context, target: BumpTarget) -> Result<()> {
    let config = Config::load(&ctx.working_dir())?;
    apply(ctx, config.version.bump(target))
}

/// Rewrite the version everywhere it is configured to live.
fn apply(ctx: &Context, new_version: Version) -> Result<()> {
    let console = ctx.console();
    let cwd = ctx.working_dir();
    let config = Config::load(&cwd)?;

    // The config file itself always carries the version.
    let config_path = Config::path_in(&cwd);
    if config_path.exists() {
        patch_and_report(&console, &config_path, &[config_rule()], new_version)?;
    } else {
        // No config yet: write one so the version has a home.
        let seeded = Config {
            version: new_version,
            ..Config::default()
        };
        std::fs::write(&config_path, toml::to_string(&seeded)?)?;
        console.info(format!("Created {}", config_path.display()));
    }

    for file in &config.version_files {
        let path = cwd.join(&file.path);
        patch_and_report(&console, &path, &file.rules, new_version)?;
    }

    console.success(format!("Version updated to {new_version}"));
    Ok(())
}

fn patch_and_report(
    console: &Console,
    path: &std::path::Path,
    rules: &[crate::core::version::PatchRule],
    version: Version,
) -> Result<()> {
    let changed = patch_file(path, rules, version)?;
    if !changed {
        console.info(format!(
            "No changes made to {}. check pattern?",
            path.display()
        ));
    }
    Ok(())
}
