use super::commands::CliArgs;
use crate::extract::Extractor;
use crate::progress::LoggingHandler;
use std::sync::Arc;
use tracing::{debug, error};

/// Runs an extraction for the parsed arguments and returns the exit code
pub fn handle_extract(args: &CliArgs) -> i32 {
    let config = args.to_config();

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        eprintln!("Error: {}", e);
        return 1;
    }
    debug!("{}", config);

    let extractor = Extractor::new(config).with_progress(Arc::new(LoggingHandler));
    match extractor.run() {
        Ok(summary) => {
            debug!(
                systems = summary.systems,
                gates = summary.gates,
                "Wrote graph outputs"
            );
            0
        }
        Err(e) => {
            debug!(kind = ?e.kind(), "Extraction aborted");
            eprintln!("Error: {}", e);
            1
        }
    }
}
