//! Build metadata extraction from uVision projects
//!
//! [`Extractor`] loads a project file and produces either the list of source
//! files or the list of include directories a GCC build needs, as
//! repository-relative paths.
//!
//! # Example
//!
//! ```no_run
//! use keil_extract::extract::{ExtractMode, Extractor};
//! use keil_extract::fs::RealFileSystem;
//! use std::path::Path;
//!
//! let fs = RealFileSystem::new();
//! let extractor = Extractor::new(&fs, "/work/firmware");
//! let sources = extractor
//!     .extract(Path::new("/work/firmware/keil/app.uvprojx"), ExtractMode::Sources)
//!     .unwrap();
//! for path in sources {
//!     println!("{}", path);
//! }
//! ```

pub mod includes;
pub mod normalize;
pub mod repo_path;
pub mod sources;

pub use includes::{extract_includes, PROJECT_ROOT_INCLUDE};
pub use normalize::{NormalizedPath, PathNormalizer};
pub use repo_path::RepoPath;
pub use sources::{
    extract_sources, GCC_STARTUP_SOURCE, KEIL_ONLY_STARTUP_FILES, VALID_SOURCE_EXTENSIONS,
};

use crate::error::ExtractError;
use crate::fs::FileSystem;
use crate::project::ProjectDocument;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Which list to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    Sources,
    Includes,
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractMode::Sources => write!(f, "sources"),
            ExtractMode::Includes => write!(f, "includes"),
        }
    }
}

pub struct Extractor<'a> {
    fs: &'a dyn FileSystem,
    repo_root: PathBuf,
}

impl<'a> Extractor<'a> {
    /// `repo_root` must be canonical; see [`crate::ExtractConfig::resolved_repo_root`]
    pub fn new(fs: &'a dyn FileSystem, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            repo_root: repo_root.into(),
        }
    }

    /// Load `project_file` and extract the requested list.
    ///
    /// Paths in the project are interpreted relative to the directory that
    /// contains the project file.
    pub fn extract(
        &self,
        project_file: &Path,
        mode: ExtractMode,
    ) -> Result<Vec<RepoPath>, ExtractError> {
        if !self.fs.is_file(project_file) {
            return Err(ExtractError::ProjectNotFound(project_file.to_path_buf()));
        }
        let project_file = self
            .fs
            .canonicalize(project_file)
            .map_err(|_| ExtractError::ProjectNotFound(project_file.to_path_buf()))?;
        let project_dir = project_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.repo_root.clone());

        info!(project = %project_file.display(), %mode, "Extracting from project");
        let doc = ProjectDocument::load(self.fs, &project_file)?;
        let paths = self.extract_from(&doc, &project_dir, mode)?;
        debug!(count = paths.len(), %mode, "Extraction complete");
        Ok(paths)
    }

    /// Extract from an already-parsed project
    pub fn extract_from(
        &self,
        doc: &ProjectDocument,
        project_dir: &Path,
        mode: ExtractMode,
    ) -> Result<Vec<RepoPath>, ExtractError> {
        let normalizer = PathNormalizer::new(self.fs, self.repo_root.clone());
        match mode {
            ExtractMode::Sources => extract_sources(doc, project_dir, &normalizer),
            ExtractMode::Includes => extract_includes(doc, project_dir, &normalizer),
        }
    }
}

/// Drop repeats, keeping the first occurrence of each path
pub(crate) fn unique(paths: Vec<RepoPath>) -> Vec<RepoPath> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect()
}
