use std::{
    io,
    path::{Path, PathBuf},
};

/// Filesystem error with additional path context.
#[derive(Debug, thiserror::Error)]
pub enum FsPathError {
    /// Error variant for failed read operations.
    #[error("failed to read from {path:?}: {source}")]
    Read {
        /// The source `io::Error`.
        source: io::Error,
        /// The path involved.
        path: PathBuf,
    },
    /// Error variant for failed write operations.
    #[error("failed to write to {path:?}: {source}")]
    Write {
        /// The source `io::Error`.
        source: io::Error,
        /// The path involved.
        path: PathBuf,
    },
}

impl FsPathError {
    /// Returns the failed read error for `path`.
    pub fn read(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read { source, path: path.into() }
    }

    /// Returns the failed write error for `path`.
    pub fn write(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write { source, path: path.into() }
    }

    /// The kind of the underlying [`io::Error`].
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source.kind(),
        }
    }

    /// The path the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
