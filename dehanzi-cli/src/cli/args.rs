use clap::Parser;
use std::path::PathBuf;

/// Strip or replace Chinese characters in image file names
#[derive(Parser, Debug)]
#[command(name = "dehanzi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder containing the images. Prompted for when omitted.
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Text substituted for each Chinese character (default: delete them)
    #[arg(short = 'r', long = "replace", value_name = "TEXT")]
    pub replace: Option<String>,

    /// Image extensions to process, comma-separated (default: jpg,jpeg,png,gif,bmp,tiff)
    #[arg(short = 'e', long = "ext", value_name = "LIST")]
    pub extensions: Option<String>,

    /// Show what would be renamed without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

impl Cli {
    /// True when the folder has to be asked for on the terminal
    pub fn is_interactive(&self) -> bool {
        self.directory.is_none()
    }
}
