//! Error types for a planning run.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::parsing::LoadError;

/// Result type for planning operations
pub type Result<T> = std::result::Result<T, ArcadeError>;

/// Errors that abort a planning run
#[derive(Debug, thiserror::Error)]
pub enum ArcadeError {
    /// The input file could not be opened.
    #[error("failed reading input file {}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file was opened but a record could not be loaded.
    #[error("failed reading input file {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// The output path is already taken and overwriting is disabled.
    #[error("failed writing output file: create {}: file already exists", .path.display())]
    OutputExists { path: PathBuf },

    /// Creating or writing the output file failed.
    #[error("failed writing output file {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ArcadeError {
    /// Line of the offending input record, when the failure is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ArcadeError::Load { source, .. } => source.line(),
            _ => None,
        }
    }
}
