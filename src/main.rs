use keil_extract::cli::{handle_extract, CliArgs};
use keil_extract::util::{init_logging, LoggingConfig};
use keil_extract::{ExtractConfig, NAME, VERSION};

use clap::Parser;
use std::process;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    let config = ExtractConfig::default();

    init_logging(LoggingConfig::from_cli(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
        &config.log_level,
        config.log_json,
    ));

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_extract(&args, config);
    process::exit(exit_code);
}
