use serde::Serialize;
use std::fmt;
use std::path::{Component, Path};

/// A path relative to the repository root, always using `/` separators.
///
/// The repository root itself is `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RepoPath(String);

impl RepoPath {
    /// Build from an already-relative path; `.` components are dropped
    pub fn from_relative(path: &Path) -> Self {
        let parts: Vec<String> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy().to_string()),
                Component::ParentDir => Some("..".to_string()),
                _ => None,
            })
            .collect();

        if parts.is_empty() {
            Self::root()
        } else {
            Self(parts.join("/"))
        }
    }

    /// For hardcoded entries, which are written with `/` already
    pub fn from_static(path: &'static str) -> Self {
        Self(path.to_string())
    }

    pub fn root() -> Self {
        Self(".".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final component, or `.` for the root
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Text from the last `.` of the file name, matching how source suffixes
    /// are usually compared; dot-files such as `.c` have no suffix.
    pub fn suffix(&self) -> Option<&str> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) if idx + 1 == name.len() => None,
            Some(idx) => Some(&name[idx..]),
        }
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RepoPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
