use crate::config::Extensions;
use crate::transform::{candidate_base, split_name};
use anyhow::{anyhow, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A file as listed in the target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub file_name: String,
    pub base: String,
    /// Extension without the dot, original case
    pub extension: Option<String>,
}

impl DirectoryEntry {
    /// Returns `None` when the path has no file name or the name is not UTF-8
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        let (base, extension) = split_name(&file_name);
        let base = base.to_string();
        let extension = extension.map(ToString::to_string);

        Some(Self {
            path: path.to_path_buf(),
            file_name,
            base,
            extension,
        })
    }

    pub fn has_accepted_extension(&self, extensions: &Extensions) -> bool {
        self.extension
            .as_deref()
            .is_some_and(|ext| extensions.accepts(ext))
    }
}

/// A single planned rename inside one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub from: PathBuf,
    /// Final path after collision resolution
    pub to: PathBuf,
    /// Sanitized base name before any collision suffix
    pub candidate: String,
    pub extension: Option<String>,
}

impl RenamePlan {
    pub fn old_name(&self) -> String {
        file_name_lossy(&self.from)
    }

    pub fn new_name(&self) -> String {
        file_name_lossy(&self.to)
    }
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Target paths handed out so far in a run
#[derive(Debug, Default)]
pub struct ClaimedTargets {
    paths: HashSet<PathBuf>,
}

impl ClaimedTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Returns false if the path was already claimed
    pub fn claim(&mut self, path: PathBuf) -> bool {
        self.paths.insert(path)
    }

    /// Give a path back, e.g. after the rename it was claimed for failed
    pub fn release(&mut self, path: &Path) -> bool {
        self.paths.remove(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// True if anything, including a dangling symlink, occupies `path`
fn path_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn with_extension(name: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) => format!("{name}.{ext}"),
        None => name.to_string(),
    }
}

/// Find a free target for `base` in `directory` and claim it.
///
/// Tries `base.ext`, then `base_1.ext`, `base_2.ext` and so on, skipping
/// names that exist on disk or were claimed earlier in the run.
pub fn resolve_target(
    directory: &Path,
    base: &str,
    extension: Option<&str>,
    claimed: &mut ClaimedTargets,
) -> PathBuf {
    let mut target = directory.join(with_extension(base, extension));
    let mut counter = 1usize;

    while claimed.is_claimed(&target) || path_taken(&target) {
        target = directory.join(with_extension(&format!("{base}_{counter}"), extension));
        counter += 1;
    }

    claimed.claim(target.clone());
    target
}

/// Plan the rename of one entry.
///
/// Returns `None` when the base name has no CJK ideographs. `successes` is
/// the number of renames completed so far in the run.
pub fn plan_entry(
    directory: &Path,
    entry: &DirectoryEntry,
    replacement: &str,
    successes: usize,
    claimed: &mut ClaimedTargets,
) -> Option<RenamePlan> {
    let candidate = candidate_base(&entry.base, replacement, successes)?;
    let to = resolve_target(
        directory,
        &candidate,
        entry.extension.as_deref(),
        claimed,
    );

    Some(RenamePlan {
        from: entry.path.clone(),
        to,
        candidate,
        extension: entry.extension.clone(),
    })
}

/// Perform a planned rename.
///
/// The target is checked again right before renaming so a file created by
/// someone else since planning is reported instead of overwritten.
pub fn execute(plan: &RenamePlan) -> Result<()> {
    if path_taken(&plan.to) {
        return Err(anyhow!(
            "Target {} already exists",
            plan.to.display()
        ));
    }

    fs::rename(&plan.from, &plan.to).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            plan.from.display(),
            plan.to.display()
        )
    })
}
