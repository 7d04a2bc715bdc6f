//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, error, info};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { database } => {
                info!(database = %database.display(), "Starting extraction");
            }
            ProgressEvent::SchemaVerified => {
                debug!("Source schema verified");
            }
            ProgressEvent::TableStarted { table, target } => {
                debug!(table = %table, target = %target.display(), "Extracting table");
            }
            ProgressEvent::TableComplete {
                table,
                rows,
                duration,
            } => {
                info!(
                    table = %table,
                    rows,
                    duration_ms = duration.as_millis(),
                    "Table extracted"
                );
            }
            ProgressEvent::Completed {
                systems,
                gates,
                total_time,
            } => {
                info!(
                    systems,
                    gates,
                    total_time_ms = total_time.as_millis(),
                    "Extraction complete"
                );
            }
            ProgressEvent::Failed { error } => {
                error!(error = %error, "Extraction failed");
            }
        }
    }
}
