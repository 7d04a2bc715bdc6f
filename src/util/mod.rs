//! Utility modules

pub mod logging;

pub use logging::{init_default, init_logging, LoggingConfig};
