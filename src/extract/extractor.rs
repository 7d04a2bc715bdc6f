//! Two-phase extraction: solar systems, then jumps
//!
//! The source is opened and both tables are verified before any output file
//! is touched, so a missing input or a schema mismatch leaves existing
//! outputs as they were. Once writing starts, a failure aborts the run and
//! whatever was written stays on disk.

use super::error::ExtractError;
use super::ndjson::NdjsonWriter;
use super::source::{SdeSource, SOLAR_SYSTEMS, SOLAR_SYSTEM_JUMPS};
use crate::config::ExtractConfig;
use crate::progress::{LoggingHandler, ProgressEvent, ProgressHandler};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Row counts of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub systems: usize,
    pub gates: usize,
    pub elapsed: Duration,
}

pub struct Extractor {
    config: ExtractConfig,
    progress: Arc<dyn ProgressHandler>,
}

impl Extractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            config,
            progress: Arc::new(LoggingHandler),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressHandler>) -> Self {
        self.progress = progress;
        self
    }

    /// Runs the whole extraction and returns the number of records written
    pub fn run(&self) -> Result<ExtractSummary, ExtractError> {
        let start = Instant::now();
        self.progress.on_progress(&ProgressEvent::Started {
            database: self.config.database.clone(),
        });

        match self.run_inner(start) {
            Ok(summary) => {
                self.progress.on_progress(&ProgressEvent::Completed {
                    systems: summary.systems,
                    gates: summary.gates,
                    total_time: summary.elapsed,
                });
                Ok(summary)
            }
            Err(e) => {
                self.progress.on_progress(&ProgressEvent::Failed {
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    fn run_inner(&self, start: Instant) -> Result<ExtractSummary, ExtractError> {
        let source = SdeSource::open(&self.config.database)?;
        source.verify_schema()?;
        self.progress.on_progress(&ProgressEvent::SchemaVerified);

        let systems = self.extract_systems(&source)?;
        let gates = self.extract_gates(&source)?;
        source.close()?;

        Ok(ExtractSummary {
            systems,
            gates,
            elapsed: start.elapsed(),
        })
    }

    /// Writes every solar system to the configured systems file
    pub fn extract_systems(&self, source: &SdeSource) -> Result<usize, ExtractError> {
        let path = self.config.systems_path();
        let phase = Instant::now();
        self.progress.on_progress(&ProgressEvent::TableStarted {
            table: SOLAR_SYSTEMS.table,
            target: path.clone(),
        });

        let rows = self.write_systems(source, create_output(&path)?, &path)?;

        self.progress.on_progress(&ProgressEvent::TableComplete {
            table: SOLAR_SYSTEMS.table,
            rows,
            duration: phase.elapsed(),
        });
        Ok(rows)
    }

    /// Writes every jump to the configured gates file
    pub fn extract_gates(&self, source: &SdeSource) -> Result<usize, ExtractError> {
        let path = self.config.gates_path();
        let phase = Instant::now();
        self.progress.on_progress(&ProgressEvent::TableStarted {
            table: SOLAR_SYSTEM_JUMPS.table,
            target: path.clone(),
        });

        let rows = self.write_gates(source, create_output(&path)?, &path)?;

        self.progress.on_progress(&ProgressEvent::TableComplete {
            table: SOLAR_SYSTEM_JUMPS.table,
            rows,
            duration: phase.elapsed(),
        });
        Ok(rows)
    }

    /// Streams solar systems into `out`; `target` names it in errors
    pub fn write_systems<W: Write>(
        &self,
        source: &SdeSource,
        out: W,
        target: &Path,
    ) -> Result<usize, ExtractError> {
        let mut writer = NdjsonWriter::new(out, self.config.style);
        source.for_each_system(self.config.order, |record| {
            writer
                .write_record(&record)
                .map_err(|e| ExtractError::output(target, e))
        })?;
        let rows = writer.records();
        writer
            .finish()
            .map_err(|e| ExtractError::output(target, e))?;
        Ok(rows)
    }

    /// Streams jumps into `out`; `target` names it in errors
    pub fn write_gates<W: Write>(
        &self,
        source: &SdeSource,
        out: W,
        target: &Path,
    ) -> Result<usize, ExtractError> {
        let mut writer = NdjsonWriter::new(out, self.config.style);
        source.for_each_gate(self.config.order, |record| {
            writer
                .write_record(&record)
                .map_err(|e| ExtractError::output(target, e))
        })?;
        let rows = writer.records();
        writer
            .finish()
            .map_err(|e| ExtractError::output(target, e))?;
        Ok(rows)
    }
}

fn create_output(path: &Path) -> Result<BufWriter<File>, ExtractError> {
    debug!(path = %path.display(), "Truncating output");
    let file = File::create(path).map_err(|e| ExtractError::output(path, e))?;
    Ok(BufWriter::new(file))
}
