//! Destination directory handling.
//!
//! Creates the target folder, snapshots its listing for collision checks and
//! persists a downloaded body with a single write.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Filesystem failure with the operation and path that caused it.
#[derive(Debug, Error)]
#[error("{op} {}: {source}", .path.display())]
pub struct StorageError {
    pub op: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl StorageError {
    fn new(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), StorageError> {
    fs::create_dir_all(dir).map_err(|e| StorageError::new("create directory", dir, e))
}

/// Names of all entries currently in `dir` (files and subdirectories).
///
/// Non-UTF-8 names are converted lossily.
pub fn existing_filenames(dir: &Path) -> Result<HashSet<String>, StorageError> {
    let entries = fs::read_dir(dir).map_err(|e| StorageError::new("list directory", dir, e))?;
    let mut names = HashSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| StorageError::new("list directory", dir, e))?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Writes `data` to `path` in one call, replacing any existing file.
/// No temp file and no rollback on partial failure.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), StorageError> {
    fs::write(path, data).map_err(|e| StorageError::new("write", path, e))
}
