//! Output formatting for extracted path lists
//!
//! `Lines` is what build scripts consume: paths joined with `\n` and no
//! trailing newline. JSON and YAML are for tooling that prefers structured
//! input.

use crate::extract::RepoPath;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One path per line, no final terminator
    Lines,
    /// JSON array of strings
    Json,
    /// YAML sequence of strings
    Yaml,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_paths(&self, paths: &[RepoPath]) -> Result<String> {
        match self.format {
            OutputFormat::Lines => Ok(Self::format_lines(paths)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(paths).context("Failed to serialize paths to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(paths).context("Failed to serialize paths to YAML")
            }
        }
    }

    fn format_lines(paths: &[RepoPath]) -> String {
        paths
            .iter()
            .map(RepoPath::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> Vec<RepoPath> {
        vec![
            RepoPath::from_static("source/main.c"),
            RepoPath::from_static("source/main/hdsc32core/startup_hc32f46x_gcc.c"),
        ]
    }

    #[test]
    fn test_lines_have_no_trailing_newline() {
        let out = OutputFormatter::new(OutputFormat::Lines)
            .format_paths(&paths())
            .unwrap();
        assert_eq!(
            out,
            "source/main.c\nsource/main/hdsc32core/startup_hc32f46x_gcc.c"
        );
    }

    #[test]
    fn test_single_line() {
        let out = OutputFormatter::new(OutputFormat::Lines)
            .format_paths(&[RepoPath::root()])
            .unwrap();
        assert_eq!(out, ".");
    }

    #[test]
    fn test_json() {
        let out = OutputFormatter::new(OutputFormat::Json)
            .format_paths(&paths())
            .unwrap();
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0], "source/main.c");
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_yaml() {
        let out = OutputFormatter::new(OutputFormat::Yaml)
            .format_paths(&[RepoPath::from_static("inc"), RepoPath::root()])
            .unwrap();
        let parsed: Vec<String> = serde_yaml::from_str(&out).unwrap();
        assert_eq!(parsed, vec!["inc", "."]);
    }
}
