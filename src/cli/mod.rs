pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, ModeArg, OutputFormatArg};
pub use handlers::{extract_paths, handle_extract};
pub use output::{OutputFormat, OutputFormatter};
