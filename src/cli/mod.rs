pub mod commands;
pub mod handlers;

pub use commands::{CliArgs, OrderArg};
pub use handlers::handle_extract;
