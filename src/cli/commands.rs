use crate::extract::ExtractMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Extract build metadata from a Keil uVision project for GCC builds
#[derive(Parser, Debug)]
#[command(
    name = "keil-extract",
    about = "Extract source files or include directories from a Keil uVision project",
    version,
    author,
    long_about = "keil-extract reads a Keil uVision project file (.uvprojx) and prints the \
                  source files or include directories it references, one per line, as \
                  paths relative to the repository root. Windows-style separators and \
                  mismatched casing are corrected against the file system.\n\n\
                  Examples:\n  \
                  keil-extract keil/app.uvprojx sources\n  \
                  keil-extract keil/app.uvprojx includes\n  \
                  keil-extract --repo-root . keil/app.uvprojx includes --format json"
)]
pub struct CliArgs {
    #[arg(value_name = "PROJECT", help = "Path to the uVision project file")]
    pub project: PathBuf,

    #[arg(value_name = "MODE", value_enum, help = "What to extract")]
    pub mode: ModeArg,

    #[arg(
        long,
        value_name = "DIR",
        help = "Repository root output paths are relative to (defaults to the parent of the executable's directory)"
    )]
    pub repo_root: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "lines",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging on stderr")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Source files to compile
    Sources,
    /// Include directories
    Includes,
}

impl From<ModeArg> for ExtractMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Sources => ExtractMode::Sources,
            ModeArg::Includes => ExtractMode::Includes,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Lines,
    Json,
    Yaml,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Lines => super::output::OutputFormat::Lines,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
        }
    }
}
