use crate::config::{
    ExtractConfig, DEFAULT_DATABASE, DEFAULT_GATES_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_SYSTEMS_FILE,
};
use crate::extract::{JsonStyle, RowOrder};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Extract the solar system graph from an EVE Online static data export
#[derive(Parser, Debug)]
#[command(
    name = "eve-map-graph",
    about = "Extract the solar system graph from an EVE Online static data export",
    version,
    long_about = "eve-map-graph reads mapSolarSystems and mapSolarSystemJumps from an SQLite \
                  static data export and writes them as newline-delimited JSON: one node per \
                  solar system and one weighted edge per jump.\n\n\
                  Examples:\n  \
                  eve-map-graph\n  \
                  eve-map-graph --database sde.sqlite --output-dir graph/\n  \
                  eve-map-graph --order id --compact"
)]
pub struct CliArgs {
    #[arg(
        short = 'd',
        long,
        value_name = "PATH",
        default_value = DEFAULT_DATABASE,
        help = "SQLite static data export to read"
    )]
    pub database: PathBuf,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory to write the output files into"
    )]
    pub output_dir: PathBuf,

    #[arg(
        long,
        value_name = "NAME",
        default_value = DEFAULT_SYSTEMS_FILE,
        help = "File name for solar system records"
    )]
    pub systems_file: String,

    #[arg(
        long,
        value_name = "NAME",
        default_value = DEFAULT_GATES_FILE,
        help = "File name for jump records"
    )]
    pub gates_file: String,

    #[arg(
        long,
        value_enum,
        default_value = "source",
        help = "Row order: as stored in the database, or sorted by identifier"
    )]
    pub order: OrderArg,

    #[arg(long, help = "Omit the space after ',' and ':' in each record")]
    pub compact: bool,

    #[arg(long, help = "Write non-ASCII names as UTF-8 instead of \\u escapes")]
    pub raw_unicode: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    Source,
    Id,
}

impl From<OrderArg> for RowOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Source => RowOrder::Source,
            OrderArg::Id => RowOrder::Id,
        }
    }
}

impl CliArgs {
    pub fn to_config(&self) -> ExtractConfig {
        ExtractConfig {
            database: self.database.clone(),
            output_dir: self.output_dir.clone(),
            systems_file: self.systems_file.clone(),
            gates_file: self.gates_file.clone(),
            order: self.order.into(),
            style: JsonStyle {
                spaced: !self.compact,
                ascii_only: !self.raw_unicode,
            },
        }
    }
}
