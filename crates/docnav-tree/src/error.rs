//! Tree building errors.

use std::path::{Path, PathBuf};

/// Error returned when the data directory cannot be walked.
///
/// Any failure aborts the whole build; there are no partial trees.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Data root does not exist or is not a directory.
    #[error("Data directory not found: {}", .0.display())]
    MissingRoot(PathBuf),
    /// I/O error while reading a directory or file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
