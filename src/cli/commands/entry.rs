//! add/fix/change/remove commands - Record a changelog entry

use anyhow::{Context as _, Result};
use chrono::Local;

use crate::cli::args::EntryArgs;
use crate::cli::Context;
use crate::core::changelog::{format_entry, load_or_init, merge, save, MergeRequest};
use crate::core::config::Config;
use crate::core::types::ChangeKind;
use crate::git;
use crate::ui::editor::{self, EditorError};

/// Record one changelog entry and commit the result.
///
/// The entry message comes from `--message` or from the user's editor; an
/// empty message aborts before anything is written. The merge targets the
/// configured version at today's date.
pub fn record(ctx: &Context, kind: ChangeKind, args: &EntryArgs) -> Result<()> {
    let console = ctx.console();
    let cwd = ctx.working_dir();
    let config = Config::load(&cwd)?;

    // "Utils: sort.hpp, iter.hpp" when files are named, plain module otherwise.
    let module_tag = if args.files.is_empty() {
        args.module.clone()
    } else {
        format!("{}: {}", args.module, args.files.join(", "))
    };

    let message = match &args.message {
        Some(message) => {
            let message = message.trim().to_string();
            if message.is_empty() {
                return Err(EditorError::Aborted.into());
            }
            message
        }
        None => editor::compose_message(&editor::default_editor())?,
    };

    let request = MergeRequest {
        version: config.version,
        date: Local::now().date_naive(),
        kind,
        entry: format_entry(&config.modules, &module_tag, &message),
    };

    let path = cwd.join(&config.changelog);
    let mut doc = load_or_init(&path)?;
    merge(&mut doc, &request);
    save(&path, &doc)?;

    console.success(format!(
        "Recorded '{}' entry for {} in {}",
        kind.keyword(),
        module_tag,
        config.changelog.display()
    ));

    if !args.no_commit {
        git::stage_all(&cwd).context("failed to stage changes")?;
        git::commit(&cwd, &message).context("failed to commit")?;
        console.success("Committed");
    }

    Ok(())
}
