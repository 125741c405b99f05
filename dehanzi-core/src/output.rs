use crate::plan::RenamePlan;
use comfy_table::{Cell, Color, Table};
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;
use std::path::PathBuf;

/// A file that could not be renamed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameFailure {
    pub file_name: String,
    pub error: String,
}

/// Progress notifications emitted while a run walks the directory
#[derive(Debug, Clone, Copy)]
pub enum RenameEvent<'a> {
    Renamed(&'a RenamePlan),
    /// Dry run only
    Planned(&'a RenamePlan),
    Failed(&'a RenameFailure),
}

/// Outcome of one run over a directory
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub directory: PathBuf,
    pub dry_run: bool,
    /// Completed (or, for a dry run, planned) renames in visiting order
    pub renamed: Vec<RenamePlan>,
    pub failures: Vec<RenameFailure>,
}

impl RunSummary {
    pub fn new(directory: PathBuf, dry_run: bool) -> Self {
        Self {
            directory,
            dry_run,
            renamed: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn renamed_count(&self) -> usize {
        self.renamed.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// True when nothing was renamed and nothing failed
    pub fn is_empty(&self) -> bool {
        self.renamed.is_empty() && self.failures.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Human readable report of the run
    pub fn format_summary(&self, use_color: bool) -> String {
        let count = plural(self.renamed_count(), "file");
        let headline = if self.dry_run {
            format!("Dry run: would rename {count}.")
        } else {
            format!("Done! Renamed {count}.")
        };

        let mut output = String::new();
        if use_color {
            writeln!(output, "{}", AnsiColor::Green.bold().paint(headline)).unwrap();
        } else {
            writeln!(output, "{headline}").unwrap();
        }

        if !self.renamed.is_empty() {
            writeln!(output, "{}", self.render_table(use_color)).unwrap();
        }

        if self.has_failures() {
            let line = format!(
                "{} could not be renamed.",
                plural(self.failure_count(), "file")
            );
            if use_color {
                writeln!(output, "{}", AnsiColor::Red.paint(line)).unwrap();
            } else {
                writeln!(output, "{line}").unwrap();
            }
        }

        output
    }

    fn render_table(&self, use_color: bool) -> String {
        let mut table = Table::new();

        if use_color {
            table.enforce_styling();
            table.set_header(vec![
                Cell::new("Old name").fg(Color::Cyan),
                Cell::new("New name").fg(Color::Cyan),
            ]);
        } else {
            table.set_header(vec!["Old name", "New name"]);
        }

        for plan in &self.renamed {
            table.add_row(vec![plan.old_name(), plan.new_name()]);
        }

        table.to_string()
    }
}

/// One progress line for an event
pub fn format_event(event: &RenameEvent<'_>, use_color: bool) -> String {
    match event {
        RenameEvent::Renamed(plan) => {
            let label = if use_color {
                AnsiColor::Green.paint("Renamed:").to_string()
            } else {
                "Renamed:".to_string()
            };
            format!("{label} '{}' -> '{}'", plan.old_name(), plan.new_name())
        },
        RenameEvent::Planned(plan) => {
            let label = if use_color {
                AnsiColor::Yellow.paint("Would rename:").to_string()
            } else {
                "Would rename:".to_string()
            };
            format!("{label} '{}' -> '{}'", plan.old_name(), plan.new_name())
        },
        RenameEvent::Failed(failure) => {
            let label = format!("Error renaming '{}':", failure.file_name);
            let label = if use_color {
                AnsiColor::Red.paint(label).to_string()
            } else {
                label
            };
            format!("{label} {}", failure.error)
        },
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
