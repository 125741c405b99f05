use crate::config::{Extensions, RenameOptions};
use crate::error::RenameError;
use crate::output::{RenameEvent, RenameFailure, RunSummary};
use crate::plan::{execute, plan_entry, ClaimedTargets, DirectoryEntry};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// What the directory listing produced for one name
#[derive(Debug)]
enum Listed {
    File(DirectoryEntry),
    Unreadable(RenameFailure),
}

/// Rename every accepted image in `directory` whose base name contains CJK
/// ideographs, substituting `replacement` for each ideograph.
pub fn rename_matching(
    directory: &Path,
    replacement: &str,
    accepted_extensions: &Extensions,
) -> Result<RunSummary, RenameError> {
    let options = RenameOptions::new(replacement).with_extensions(accepted_extensions.clone());
    rename_with_options(directory, &options, &mut |_| {})
}

/// Rename operation - returns structured data and reports each file through
/// `on_event` as it is handled.
///
/// Precondition failures are returned before anything is touched. Failures
/// of individual files are collected in the summary and never stop the run.
pub fn rename_with_options(
    directory: &Path,
    options: &RenameOptions,
    on_event: &mut dyn FnMut(&RenameEvent<'_>),
) -> Result<RunSummary, RenameError> {
    check_directory(directory)?;
    let listing = list_directory(directory)?;

    let mut claimed = ClaimedTargets::new();
    let summary = listing.into_iter().fold(
        RunSummary::new(directory.to_path_buf(), options.dry_run),
        |mut summary, listed| {
            match listed {
                Listed::File(entry) => {
                    visit_entry(directory, &entry, options, &mut claimed, &mut summary, on_event);
                },
                Listed::Unreadable(failure) => {
                    on_event(&RenameEvent::Failed(&failure));
                    summary.failures.push(failure);
                },
            }
            summary
        },
    );

    Ok(summary)
}

/// Validate that `directory` exists and is a directory
pub fn check_directory(directory: &Path) -> Result<(), RenameError> {
    match fs::metadata(directory) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(RenameError::NotADirectory(directory.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(RenameError::NotFound(directory.to_path_buf()))
        },
        Err(source) => Err(RenameError::ReadDir {
            path: directory.to_path_buf(),
            source,
        }),
    }
}

/// Snapshot of the regular files directly inside `directory`, sorted by name
fn list_directory(directory: &Path) -> Result<Vec<Listed>, RenameError> {
    let mut listing = Vec::new();

    for item in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory listing failed"));
                return Err(RenameError::ReadDir {
                    path: directory.to_path_buf(),
                    source,
                });
            },
            Err(err) => {
                let file_name = err
                    .path()
                    .and_then(Path::file_name)
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                listing.push(Listed::Unreadable(RenameFailure {
                    file_name,
                    error: err.to_string(),
                }));
                continue;
            },
        };

        if !entry.path().is_file() {
            continue;
        }

        // Names that are not UTF-8 cannot hold ideographs we can classify
        if let Some(parsed) = DirectoryEntry::from_path(entry.path()) {
            listing.push(Listed::File(parsed));
        }
    }

    Ok(listing)
}

fn visit_entry(
    directory: &Path,
    entry: &DirectoryEntry,
    options: &RenameOptions,
    claimed: &mut ClaimedTargets,
    summary: &mut RunSummary,
    on_event: &mut dyn FnMut(&RenameEvent<'_>),
) {
    if !entry.has_accepted_extension(&options.extensions) {
        return;
    }

    let Some(plan) = plan_entry(
        directory,
        entry,
        &options.replacement,
        summary.renamed_count(),
        claimed,
    ) else {
        return;
    };

    if options.dry_run {
        on_event(&RenameEvent::Planned(&plan));
        summary.renamed.push(plan);
        return;
    }

    match execute(&plan) {
        Ok(()) => {
            on_event(&RenameEvent::Renamed(&plan));
            summary.renamed.push(plan);
        },
        Err(e) => {
            // Nothing was created at the target, so later files may use it
            claimed.release(&plan.to);
            let failure = RenameFailure {
                file_name: entry.file_name.clone(),
                error: format!("{e:#}"),
            };
            on_event(&RenameEvent::Failed(&failure));
            summary.failures.push(failure);
        },
    }
}
