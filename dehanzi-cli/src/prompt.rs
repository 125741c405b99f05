use anyhow::{Context, Result};
use dehanzi_core::{check_directory, PromptGuard, RenameError, RenameOptions};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const BANNER_WIDTH: usize = 50;

pub fn print_banner<W: Write>(writer: &mut W) -> Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(writer, "{rule}")?;
    writeln!(writer, "Remove Chinese characters from photo file names")?;
    writeln!(writer, "{rule}")?;
    Ok(())
}

/// Read one line while the prompt flag is raised. `None` means end of input.
fn read_answer<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let _guard = PromptGuard::activate();
    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}

fn ask<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> Result<Option<String>> {
    write!(writer, "{question}")?;
    writer.flush().context("Failed to flush stdout")?;
    read_answer(reader)
}

/// Remove one pair of matching straight quotes around a pasted path
pub fn strip_quotes(input: &str) -> &str {
    for quote in ['"', '\''] {
        if input.len() >= 2 && input.starts_with(quote) && input.ends_with(quote) {
            return &input[1..input.len() - 1];
        }
    }
    input
}

/// Ask for a folder until an existing directory is given
pub fn prompt_directory<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<Option<PathBuf>> {
    loop {
        let Some(answer) = ask(reader, writer, "\nEnter the folder containing the photos: ")? else {
            return Ok(None);
        };
        let path = PathBuf::from(strip_quotes(answer.trim()));

        match check_directory(&path) {
            Ok(()) => return Ok(Some(path)),
            Err(RenameError::NotFound(_)) => {
                writeln!(
                    writer,
                    "Error: path '{}' does not exist, please try again",
                    path.display()
                )?;
            },
            Err(RenameError::NotADirectory(_)) => {
                writeln!(
                    writer,
                    "Error: '{}' is not a folder, please try again",
                    path.display()
                )?;
            },
            Err(e) => writeln!(writer, "Error: {e}, please try again")?,
        }
    }
}

/// Ask for the replacement text; an empty answer deletes the characters
pub fn prompt_replacement<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<Option<String>> {
    let answer = ask(
        reader,
        writer,
        "\nEnter the text to replace Chinese characters with (press Enter to delete them): ",
    )?;
    Ok(answer.map(|text| text.trim().to_string()))
}

pub fn describe_replacement(replacement: &str) -> String {
    if replacement.is_empty() {
        "delete Chinese characters".to_string()
    } else {
        format!("'{replacement}'")
    }
}

/// Show what is about to happen and ask for a `y`
pub fn confirm<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    directory: &Path,
    options: &RenameOptions,
) -> Result<bool> {
    writeln!(writer, "\nYou are about to:")?;
    writeln!(writer, "- Folder: {}", directory.display())?;
    writeln!(
        writer,
        "- Replacement: {}",
        describe_replacement(&options.replacement)
    )?;
    writeln!(writer, "- Extensions: {}", options.extensions)?;

    let answer = ask(reader, writer, "\nProceed? (y/n): ")?;
    Ok(answer.is_some_and(|text| text.trim().eq_ignore_ascii_case("y")))
}
