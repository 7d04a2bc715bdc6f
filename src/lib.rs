//! eve-map-graph - solar system graph extraction from EVE Online static data
//!
//! Reads the `mapSolarSystems` and `mapSolarSystemJumps` tables from an SQLite
//! static data export and writes them as newline-delimited JSON: one node
//! record per solar system and one weighted edge record per jump, ready for
//! graph tooling.
//!
//! # Example Usage
//!
//! ```no_run
//! use eve_map_graph::{ExtractConfig, Extractor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractConfig::default();
//! config.validate()?;
//!
//! let summary = Extractor::new(config).run()?;
//! println!("{} systems, {} gates", summary.systems, summary.gates);
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`extract`]: source access, record types, NDJSON output and the run itself
//! - [`config`]: run configuration with fixed defaults
//! - [`cli`]: command line parsing and the binary's entry handler
//! - [`progress`]: progress events and handlers
//! - [`util`]: logging setup

pub mod cli;
pub mod config;
pub mod extract;
pub mod progress;
pub mod util;

pub use config::{ConfigError, ExtractConfig};
pub use extract::{
    ErrorKind, ExtractError, ExtractSummary, Extractor, GateRecord, JsonStyle, RowOrder,
    SdeSource, SystemRecord,
};
pub use util::{init_default, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Tracing target prefix for this crate
pub(crate) const CRATE_TARGET: &str = "eve_map_graph";
