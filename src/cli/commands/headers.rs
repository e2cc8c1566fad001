//! headers command - Check and normalize source-file headers

use anyhow::Result;

use crate::cli::Context;
use crate::core::config::Config;
use crate::core::headers::{
    check_lines, collect_files, fix_lines, read_lines, write_lines, Finding,
};

/// Check every covered file under the project root.
///
/// Reports violations as warnings, rewrites them with `fix`, or prints the
/// findings as JSON with `list`.
pub fn headers(ctx: &Context, fix: bool, list: bool) -> Result<()> {
    let console = ctx.console();
    let cwd = ctx.working_dir();
    let config = Config::load(&cwd)?;
    let spec = config.header_spec();

    let mut findings: Vec<Finding> = Vec::new();

    for (path, role) in collect_files(&cwd, &spec)? {
        let lines = read_lines(&path)?;
        let Some(kind) = check_lines(&lines, &spec, role) else {
            continue;
        };

        // Report paths relative to the project root.
        let display_path = path.strip_prefix(&cwd).unwrap_or(&path).to_path_buf();

        if !list {
            console.warn(format!("{kind} in: {}", display_path.display()));
        }

        if fix {
            write_lines(&path, &fix_lines(&lines, &spec, role))?;
            console.info(format!("Fixed: {}", display_path.display()));
        }

        findings.push(Finding {
            path: display_path,
            role,
            kind,
        });
    }

    if list {
        println!("{}", serde_json::to_string_pretty(&findings)?);
        return Ok(());
    }

    if findings.is_empty() {
        console.success("Nothing to do!");
    } else if fix {
        console.success("Done");
    }

    Ok(())
}
