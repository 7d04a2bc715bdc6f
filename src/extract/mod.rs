//! Static data export to graph extraction
//!
//! Reads the solar system and jump tables from an SQLite export and writes
//! them as newline-delimited JSON nodes and edges.

pub mod error;
pub mod extractor;
pub mod ndjson;
pub mod records;
pub mod source;

pub use error::{ErrorKind, ExtractError};
pub use extractor::{ExtractSummary, Extractor};
pub use ndjson::{JsonStyle, NdjsonWriter};
pub use records::{GateRecord, SystemRecord};
pub use source::{RowOrder, SdeSource, TableSpec, SOLAR_SYSTEMS, SOLAR_SYSTEM_JUMPS};
