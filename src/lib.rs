//! keil-extract - build metadata from Keil uVision projects for GCC builds
//!
//! Firmware that is developed in Keil uVision can also be built with a GNU
//! toolchain if the build knows which sources to compile and which include
//! directories to pass. This crate reads both lists out of a `.uvprojx`
//! project file and prints them as repository-relative, forward-slash paths.
//!
//! # Core Concepts
//!
//! - **Project document**: the parsed project; only `FilePath` and
//!   `IncludePath` elements are consulted
//! - **Normalization**: Windows-style, case-insensitive project paths are
//!   mapped onto the real file tree and expressed relative to the repository
//!   root
//! - **Repository root**: every emitted path must lie inside it; anything
//!   outside aborts the extraction
//!
//! # Example Usage
//!
//! ```no_run
//! use keil_extract::{ExtractConfig, ExtractMode, Extractor, RealFileSystem};
//! use std::path::Path;
//!
//! fn print_includes() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo_root = ExtractConfig::default().resolved_repo_root()?;
//!     let fs = RealFileSystem::new();
//!     let extractor = Extractor::new(&fs, repo_root);
//!
//!     for dir in extractor.extract(Path::new("keil/app.uvprojx"), ExtractMode::Includes)? {
//!         println!("-I{}", dir);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fs;
pub mod project;
pub mod util;

pub use config::{ConfigError, ExtractConfig};
pub use error::ExtractError;
pub use extract::{ExtractMode, Extractor, PathNormalizer, RepoPath};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use project::ProjectDocument;
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
