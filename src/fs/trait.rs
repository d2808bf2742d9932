//! FileSystem trait definition

use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Abstraction over the read-only file system operations the extractor needs
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Names of the entries in a directory, as stored on disk
    fn read_dir(&self, path: &Path) -> Result<Vec<OsString>>;

    /// Resolve a path to its canonical absolute form; fails if it does not exist
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}
