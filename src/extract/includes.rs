use super::normalize::PathNormalizer;
use super::repo_path::RepoPath;
use super::unique;
use crate::error::ExtractError;
use crate::project::ProjectDocument;
use std::path::Path;
use tracing::debug;

/// Headers included relative to the repository top level need this
pub const PROJECT_ROOT_INCLUDE: &str = ".";

/// Include directories from every `IncludePath` element.
///
/// Each element holds a `;`-separated list; entries that are not existing
/// directories are dropped. `.` is always appended, then duplicates removed.
pub fn extract_includes(
    doc: &ProjectDocument,
    project_dir: &Path,
    normalizer: &PathNormalizer<'_>,
) -> Result<Vec<RepoPath>, ExtractError> {
    let mut include_dirs = Vec::new();

    for text in doc.include_paths() {
        for entry in text.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let path = normalizer.normalize(project_dir, entry)?;
            if normalizer.fs().is_dir(&path.absolute) {
                include_dirs.push(path.relative);
            } else {
                debug!(path = %path.relative, "Skipping missing include directory");
            }
        }
    }

    include_dirs.push(RepoPath::from_static(PROJECT_ROOT_INCLUDE));
    Ok(unique(include_dirs))
}
