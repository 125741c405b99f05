use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a run before anything is renamed
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("path '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read directory '{}'", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no file extensions given")]
    EmptyExtensions,

    #[error("invalid file extension '{0}'")]
    InvalidExtension(String),
}

impl RenameError {
    /// True when the error was caused by what the user asked for, as opposed
    /// to a failure of the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::NotADirectory(_)
                | Self::EmptyExtensions
                | Self::InvalidExtension(_)
        )
    }
}
