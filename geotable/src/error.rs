//! Error types for the converter.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for converter operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Fatal errors that abort a conversion run.
///
/// Malformed input lines are not errors; they are skipped while building
/// the record table.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be opened or read.
    #[error("failed to read input {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    /// The generated document could not be written to its destination.
    #[error("failed to write output {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

impl ConvertError {
    /// Path of the file the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadInput { path, .. } | Self::WriteOutput { path, .. } => path.as_path(),
        }
    }
}
