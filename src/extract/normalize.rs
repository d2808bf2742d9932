//! Keil path normalization
//!
//! uVision projects are usually authored on Windows: paths use `\`, are
//! relative to the project file, and their casing rarely matches what is on
//! disk once the tree is checked out on a case-sensitive file system. Every
//! path goes through the same steps:
//!
//! 1. `\` becomes `/` and the path is joined onto the project directory.
//! 2. Case correction: unless the path already exists, each component is
//!    looked up case-insensitively in its parent directory listing. Components
//!    that cannot be found are kept literally.
//! 3. The result is resolved (`.`/`..` folded, symlinks followed where the
//!    path exists).
//! 4. It is re-expressed relative to the repository root, which it must lie
//!    inside.

use super::repo_path::RepoPath;
use crate::error::ExtractError;
use crate::fs::FileSystem;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};
use tracing::trace;

/// A normalized project path: where it is on disk and how it is printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPath {
    pub absolute: PathBuf,
    pub relative: RepoPath,
}

pub struct PathNormalizer<'a> {
    fs: &'a dyn FileSystem,
    repo_root: PathBuf,
}

impl<'a> PathNormalizer<'a> {
    /// `repo_root` must already be canonical
    pub fn new(fs: &'a dyn FileSystem, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            repo_root: repo_root.into(),
        }
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs
    }

    pub fn normalize(&self, base: &Path, raw: &str) -> Result<NormalizedPath, ExtractError> {
        let candidate = base.join(raw.replace('\\', "/"));
        let corrected = self.case_correct(&candidate);
        let resolved = self.resolve(&corrected);

        let relative = match resolved.strip_prefix(&self.repo_root) {
            Ok(relative) => RepoPath::from_relative(relative),
            Err(_) => {
                return Err(ExtractError::OutsideRepository {
                    path: resolved,
                    root: self.repo_root.clone(),
                })
            }
        };

        trace!(raw, normalized = %relative, "Normalized project path");
        Ok(NormalizedPath {
            absolute: resolved,
            relative,
        })
    }

    /// Rebuild `path` using the on-disk casing of every component that exists.
    pub fn case_correct(&self, path: &Path) -> PathBuf {
        if self.fs.exists(path) {
            return path.to_path_buf();
        }

        let mut corrected = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => corrected.push(component),
                Component::CurDir => {}
                Component::ParentDir => {
                    corrected.pop();
                }
                Component::Normal(name) => {
                    corrected = match self.find_entry(&corrected, name) {
                        Some(actual) => corrected.join(actual),
                        None => corrected.join(name),
                    };
                }
            }
        }
        corrected
    }

    /// Exact match first, then the lexicographically first case-insensitive
    /// match. Unlistable directories (vanished, not a directory, no
    /// permission) yield `None`. Names that are not valid UTF-8 only match
    /// exactly.
    fn find_entry(&self, dir: &Path, name: &OsStr) -> Option<OsString> {
        let listing_dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };

        let entries = match self.fs.read_dir(listing_dir) {
            Ok(entries) => entries,
            Err(e) => {
                trace!(
                    dir = %listing_dir.display(),
                    error = %e,
                    "Cannot list directory, keeping literal component"
                );
                return None;
            }
        };

        if entries.iter().any(|entry| entry == name) {
            return Some(name.to_os_string());
        }

        let wanted = name.to_str()?.to_lowercase();
        entries
            .into_iter()
            .filter(|entry| {
                entry
                    .to_str()
                    .is_some_and(|candidate| candidate.to_lowercase() == wanted)
            })
            .min()
    }

    /// Absolute path with `.`/`..` folded and symlinks resolved for the
    /// existing prefix. Missing tails are appended lexically.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let mut resolved = if path.is_absolute() {
            PathBuf::new()
        } else {
            self.fs.canonicalize(Path::new(".")).unwrap_or_default()
        };

        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => resolved.push(component),
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::Normal(name) => {
                    resolved.push(name);
                    if let Ok(canonical) = self.fs.canonicalize(&resolved) {
                        resolved = canonical;
                    }
                }
            }
        }
        resolved
    }
}
