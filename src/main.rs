use eve_map_graph::cli::{handle_extract, CliArgs};
use eve_map_graph::util::{init_logging, LoggingConfig};
use eve_map_graph::{NAME, VERSION};

use clap::Parser;
use std::process;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_flags(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
    ));

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    process::exit(handle_extract(&args));
}
