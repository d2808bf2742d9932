use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an extraction.
///
/// Stale references inside the project (missing files, missing include
/// directories) are filtered out and never surface here.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("project file not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("failed to read project file {}: {message}", path.display())]
    ReadProject { path: PathBuf, message: String },

    #[error("failed to parse project file {}: {source}", path.display())]
    MalformedXml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("path {} is outside repository {}", path.display(), root.display())]
    OutsideRepository { path: PathBuf, root: PathBuf },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
