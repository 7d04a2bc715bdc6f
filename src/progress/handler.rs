//! Progress handler trait and events

use std::path::PathBuf;
use std::time::Duration;

/// Events emitted while an extraction runs
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Extraction started against `database`
    Started { database: PathBuf },

    /// Source schema checked for both tables
    SchemaVerified,

    /// Started copying `table` into `target`
    TableStarted { table: &'static str, target: PathBuf },

    /// Finished copying `table`
    TableComplete {
        table: &'static str,
        rows: usize,
        duration: Duration,
    },

    /// Both outputs written
    Completed {
        systems: usize,
        gates: usize,
        total_time: Duration,
    },

    /// Extraction aborted
    Failed { error: String },
}

/// Trait for handling progress events during extraction
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}
