//! Run configuration
//!
//! Every setting has a fixed default, so a run with no arguments reads
//! `sqlite-latest.sqlite` and writes `systems.json` and `gates.json` into the
//! working directory. The command line overrides individual fields. No
//! environment variable affects what is extracted or where it is written.
//!
//! # Example
//!
//! ```
//! use eve_map_graph::ExtractConfig;
//! use std::path::PathBuf;
//!
//! let config = ExtractConfig::default();
//! config.validate().expect("defaults are valid");
//! assert_eq!(config.systems_path(), PathBuf::from("./systems.json"));
//! ```

use crate::extract::ndjson::JsonStyle;
use crate::extract::source::RowOrder;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DATABASE: &str = "sqlite-latest.sqlite";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_SYSTEMS_FILE: &str = "systems.json";
pub const DEFAULT_GATES_FILE: &str = "gates.json";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// SQLite static data export to read
    pub database: PathBuf,

    /// Directory receiving both output files
    pub output_dir: PathBuf,

    /// File name for solar system records
    pub systems_file: String,

    /// File name for jump records
    pub gates_file: String,

    /// Row order for both queries
    pub order: RowOrder,

    /// JSON layout of each output line
    pub style: JsonStyle,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            systems_file: DEFAULT_SYSTEMS_FILE.to_string(),
            gates_file: DEFAULT_GATES_FILE.to_string(),
            order: RowOrder::default(),
            style: JsonStyle::default(),
        }
    }
}

impl ExtractConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when an output file name is empty or contains a
    /// path separator, when both outputs would land on the same file, or
    /// when either output would overwrite the input database.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (label, name) in [("systems", &self.systems_file), ("gates", &self.gates_file)] {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed(format!(
                    "{} file name must not be empty",
                    label
                )));
            }
            if name.contains(['/', '\\']) {
                return Err(ConfigError::ValidationFailed(format!(
                    "{} file name must not contain a path separator: {}",
                    label, name
                )));
            }
        }

        if self.systems_file == self.gates_file {
            return Err(ConfigError::ValidationFailed(format!(
                "systems and gates outputs both point at {}",
                self.systems_file
            )));
        }

        for output in [self.systems_path(), self.gates_path()] {
            if same_file(&output, &self.database) {
                return Err(ConfigError::ValidationFailed(format!(
                    "output {} would overwrite the input database",
                    output.display()
                )));
            }
        }

        Ok(())
    }

    pub fn systems_path(&self) -> PathBuf {
        self.output_dir.join(&self.systems_file)
    }

    pub fn gates_path(&self) -> PathBuf {
        self.output_dir.join(&self.gates_file)
    }
}

// Canonical paths when both exist, otherwise a lexical comparison without `.` segments.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => without_cur_dir(a) == without_cur_dir(b),
    }
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl fmt::Display for ExtractConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Extraction Configuration:")?;
        writeln!(f, "  Database: {}", self.database.display())?;
        writeln!(f, "  Systems Output: {}", self.systems_path().display())?;
        writeln!(f, "  Gates Output: {}", self.gates_path().display())?;
        writeln!(f, "  Row Order: {:?}", self.order)?;
        writeln!(
            f,
            "  JSON Style: spaced={} ascii_only={}",
            self.style.spaced, self.style.ascii_only
        )?;
        Ok(())
    }
}
