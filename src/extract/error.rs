use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse classification of extraction failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input database path does not exist, is not a regular file, or
    /// cannot be read
    InputNotFound,
    /// The input is not a database, or the engine failed while reading it
    Database,
    /// A required table or column is missing, or a row has the wrong shape
    SchemaMismatch,
    /// An output file could not be created, written or flushed
    OutputWriteFailure,
}

/// Errors raised while extracting the map graph
///
/// Every variant aborts the run. Nothing is retried and partially written
/// outputs are left in place.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Input database not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input database is not readable: {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Not a valid SQLite database: {}: {source}", path.display())]
    InvalidDatabase {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Required table '{table}' is missing from the database")]
    MissingTable { table: String },

    #[error("Required column '{column}' is missing from table '{table}'")]
    MissingColumn { table: String, column: String },

    #[error("Query against '{table}' failed: {source}")]
    Query {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Row {row} of '{table}' does not match the expected types: {source}")]
    RowDecode {
        table: String,
        row: usize,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to close {}: {source}", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    pub fn output(path: &Path, source: io::Error) -> Self {
        ExtractError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn query(table: &str, source: rusqlite::Error) -> Self {
        ExtractError::Query {
            table: table.to_string(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::InputNotFound(_) | ExtractError::InputUnreadable { .. } => {
                ErrorKind::InputNotFound
            }
            ExtractError::InvalidDatabase { .. }
            | ExtractError::Query { .. }
            | ExtractError::Close { .. } => ErrorKind::Database,
            ExtractError::MissingTable { .. }
            | ExtractError::MissingColumn { .. }
            | ExtractError::RowDecode { .. } => ErrorKind::SchemaMismatch,
            ExtractError::OutputWrite { .. } => ErrorKind::OutputWriteFailure,
        }
    }
}
