//! Wrappers over `std::fs` that attach the offending path to their errors.

use crate::errors::FsPathError;
use std::{fs, path::Path};

type Result<T> = std::result::Result<T, FsPathError>;

/// Reads the entire contents of a file into a byte vector.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|err| FsPathError::read(err, path))
}

/// Writes `contents` to a file, creating it or truncating an existing one.
pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents.as_ref()).map_err(|err| FsPathError::write(err, path))
}
