use anyhow::Result;
use dehanzi_core::{
    check_directory, format_event, rename_with_options, Extensions, RenameEvent, RenameOptions,
};
use std::io::{self, BufRead, Write};

use crate::cli::Cli;
use crate::prompt::{confirm, print_banner, prompt_directory, prompt_replacement};

/// How a run ended when no error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed { has_failures: bool },
    Cancelled,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Completed { has_failures: true } => 1,
            Self::Completed { has_failures: false } | Self::Cancelled => 0,
        }
    }
}

fn cancelled<W: Write>(writer: &mut W) -> Result<Outcome> {
    writeln!(writer, "\nOperation cancelled")?;
    Ok(Outcome::Cancelled)
}

pub fn handle_rename(cli: &Cli, use_color: bool) -> Result<Outcome> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run(cli, use_color, &mut input, &mut output)
}

/// Collect the inputs, confirm, then rename and print the results
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    use_color: bool,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    let extensions = match cli.extensions.as_deref() {
        Some(list) => Extensions::parse_list(list)?,
        None => Extensions::default(),
    };

    let directory = if let Some(dir) = &cli.directory {
        check_directory(dir)?;
        dir.clone()
    } else {
        print_banner(output)?;
        match prompt_directory(input, output)? {
            Some(dir) => dir,
            None => return cancelled(output),
        }
    };

    let replacement = match &cli.replace {
        Some(text) => text.clone(),
        None if cli.is_interactive() => match prompt_replacement(input, output)? {
            Some(text) => text,
            None => return cancelled(output),
        },
        None => String::new(),
    };

    let options = RenameOptions::new(replacement)
        .with_extensions(extensions)
        .with_dry_run(cli.dry_run);

    if !cli.yes && !cli.dry_run && !confirm(input, output, &directory, &options)? {
        return cancelled(output);
    }

    writeln!(output)?;
    let mut write_error = None;
    let summary = rename_with_options(&directory, &options, &mut |event| {
        let line = format_event(event, use_color);
        match event {
            RenameEvent::Failed(_) => eprintln!("{line}"),
            RenameEvent::Renamed(_) | RenameEvent::Planned(_) => {
                if let Err(e) = writeln!(output, "{line}") {
                    write_error.get_or_insert(e);
                }
            },
        }
    })?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    write!(output, "\n{}", summary.format_summary(use_color))?;
    output.flush()?;

    Ok(Outcome::Completed {
        has_failures: summary.has_failures(),
    })
}
