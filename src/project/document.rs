use crate::error::ExtractError;
use crate::fs::FileSystem;
use roxmltree::Document;
use std::path::Path;
use tracing::debug;

pub const FILE_PATH_TAG: &str = "FilePath";
pub const INCLUDE_PATH_TAG: &str = "IncludePath";

/// The parts of a uVision project the extractor consults.
///
/// Only the text of `FilePath` and `IncludePath` elements is kept, in
/// document order, wherever they appear in the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDocument {
    file_paths: Vec<String>,
    include_paths: Vec<String>,
}

impl ProjectDocument {
    /// Read and parse a project file. The caller has already checked it exists.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, ExtractError> {
        let content = fs
            .read_to_string(path)
            .map_err(|e| ExtractError::ReadProject {
                path: path.to_path_buf(),
                message: format!("{:#}", e),
            })?;
        Self::parse(path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self, ExtractError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let doc = Document::parse(content).map_err(|source| ExtractError::MalformedXml {
            path: path.to_path_buf(),
            source,
        })?;

        let mut file_paths = Vec::new();
        let mut include_paths = Vec::new();

        for node in doc.descendants().filter(|n| n.is_element()) {
            match node.tag_name().name() {
                FILE_PATH_TAG => file_paths.push(element_text(node)),
                INCLUDE_PATH_TAG => include_paths.push(element_text(node)),
                _ => {}
            }
        }

        debug!(
            project = %path.display(),
            file_paths = file_paths.len(),
            include_paths = include_paths.len(),
            "Parsed project file"
        );

        Ok(Self {
            file_paths,
            include_paths,
        })
    }

    /// Text of every `FilePath` element; empty elements yield empty strings
    pub fn file_paths(&self) -> &[String] {
        &self.file_paths
    }

    /// Text of every `IncludePath` element, still `;`-delimited
    pub fn include_paths(&self) -> &[String] {
        &self.include_paths
    }
}

// Leading text only: whatever precedes the first child element, with
// comments and processing instructions skipped.
fn element_text(node: roxmltree::Node<'_, '_>) -> String {
    node.children()
        .take_while(|child| !child.is_element())
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
