//! Configuration management for keil-extract
//!
//! Settings are loaded from environment variables with defaults; command-line
//! flags override them in the CLI handler.
//!
//! # Environment Variables
//!
//! - `KEIL_EXTRACT_REPO_ROOT`: Repository root all output paths are relative to -
//!   default: the parent of the directory containing the executable
//! - `KEIL_EXTRACT_LOG_LEVEL`: Logging level - default: "warn"
//! - `KEIL_EXTRACT_LOG_JSON`: Emit logs as JSON (true|false) - default: "false"
//!
//! # Example
//!
//! ```no_run
//! use keil_extract::ExtractConfig;
//!
//! let config = ExtractConfig::default();
//! config.validate().expect("Invalid configuration");
//! let repo_root = config.resolved_repo_root().expect("No repository root");
//! println!("{}", repo_root.display());
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_LOG_JSON: bool = false;

pub const REPO_ROOT_ENV: &str = "KEIL_EXTRACT_REPO_ROOT";
pub const LOG_LEVEL_ENV: &str = "KEIL_EXTRACT_LOG_LEVEL";
pub const LOG_JSON_ENV: &str = "KEIL_EXTRACT_LOG_JSON";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("repository root not found: {}", .0.display())]
    RepoRootNotFound(PathBuf),

    #[error("repository root is not a directory: {}", .0.display())]
    RepoRootNotDirectory(PathBuf),

    #[error("cannot locate repository root from executable: {0}")]
    ExecutableLocation(String),
}

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Explicit repository root; `None` derives it from the executable location
    pub repo_root: Option<PathBuf>,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        let repo_root = env::var(REPO_ROOT_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var(LOG_JSON_ENV)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_LOG_JSON);

        Self {
            repo_root,
            log_level,
            log_json,
        }
    }
}

impl ExtractConfig {
    pub fn with_repo_root(mut self, repo_root: PathBuf) -> Self {
        self.repo_root = Some(repo_root);
        self
    }

    /// Check the repository root. The log level is not checked here: it is
    /// resolved against the CLI flags in [`crate::util::LoggingConfig::from_cli`],
    /// where an unknown value falls back to WARN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let root = self.repo_root_candidate()?;
        if !root.exists() {
            return Err(ConfigError::RepoRootNotFound(root));
        }
        if !root.is_dir() {
            return Err(ConfigError::RepoRootNotDirectory(root));
        }
        Ok(())
    }

    /// Canonical absolute repository root
    pub fn resolved_repo_root(&self) -> Result<PathBuf, ConfigError> {
        let root = self.repo_root_candidate()?;
        let canonical = root
            .canonicalize()
            .map_err(|_| ConfigError::RepoRootNotFound(root.clone()))?;
        if !canonical.is_dir() {
            return Err(ConfigError::RepoRootNotDirectory(canonical));
        }
        Ok(canonical)
    }

    fn repo_root_candidate(&self) -> Result<PathBuf, ConfigError> {
        match &self.repo_root {
            Some(root) => Ok(root.clone()),
            None => default_repo_root(),
        }
    }
}

/// The tool is expected to live one directory below the repository top level
/// (e.g. `<repo>/tools/keil-extract`), so the root is its grandparent.
pub fn default_repo_root() -> Result<PathBuf, ConfigError> {
    let exe = env::current_exe()
        .and_then(|p| p.canonicalize())
        .map_err(|e| ConfigError::ExecutableLocation(e.to_string()))?;

    exe.parent()
        .and_then(|dir| dir.parent())
        .map(|root| root.to_path_buf())
        .ok_or_else(|| {
            ConfigError::ExecutableLocation(format!("{} has no grandparent", exe.display()))
        })
}

impl fmt::Display for ExtractConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "keil-extract Configuration:")?;
        match &self.repo_root {
            Some(root) => writeln!(f, "  Repository Root: {}", root.display())?,
            None => writeln!(f, "  Repository Root: <executable grandparent>")?,
        }
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        Ok(())
    }
}
