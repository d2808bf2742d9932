use super::commands::CliArgs;
use super::output::{OutputFormat, OutputFormatter};
use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::extract::{Extractor, RepoPath};
use crate::fs::RealFileSystem;
use std::io::{self, Write};
use tracing::{debug, error};

/// Run one extraction and print the result. Returns the process exit code.
///
/// Output is rendered in full before anything is written, so stdout is either
/// the complete list or empty.
pub fn handle_extract(args: &CliArgs, config: ExtractConfig) -> i32 {
    let paths = match extract_paths(args, config) {
        Ok(paths) => paths,
        Err(e) => {
            debug!(error = ?e, "Extraction failed");
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let format: OutputFormat = args.format.into();
    let output = match OutputFormatter::new(format).format_paths(&paths) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return 1;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
    {
        error!("Failed to write output: {}", e);
        return 1;
    }
    0
}

pub fn extract_paths(args: &CliArgs, config: ExtractConfig) -> Result<Vec<RepoPath>, ExtractError> {
    let config = match &args.repo_root {
        Some(root) => config.with_repo_root(root.clone()),
        None => config,
    };
    config.validate()?;
    let repo_root = config.resolved_repo_root()?;
    debug!(repo_root = %repo_root.display(), "Resolved repository root");

    let fs = RealFileSystem::new();
    Extractor::new(&fs, repo_root).extract(&args.project, args.mode.into())
}
