//! Error types for the id3 CLI

use std::path::PathBuf;
use std::process::ExitCode;

use id3::Id3Error;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Training or input table could not be parsed
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// Tree file is not a valid decision tree
    #[error("Invalid tree: {0}")]
    InvalidTree(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding of command output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Learning or classification failed
    #[error("{0}")]
    Id3(String),
}

impl CliError {
    /// Get the numeric exit status for this error
    pub(crate) fn code(&self) -> u8 {
        match self {
            Self::Id3(_) | Self::Json(_) => 1,
            Self::FileNotFound(_) | Self::NotAFile(_) => 3,
            Self::InvalidTable(_) | Self::InvalidTree(_) => 4,
            Self::Io(_) => 7,
        }
    }

    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl From<Id3Error> for CliError {
    fn from(e: Id3Error) -> Self {
        match e {
            Id3Error::Io(io) => Self::Io(io),
            other @ Id3Error::MalformedTable { .. } => Self::InvalidTable(other.to_string()),
            other @ (Id3Error::InvalidTree { .. } | Id3Error::Serialization(_)) => {
                Self::InvalidTree(other.to_string())
            }
            other => Self::Id3(other.to_string()),
        }
    }
}
