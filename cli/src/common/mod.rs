//! Common utilities shared across CLI commands.

pub mod error;
pub mod state;

pub use error::{CliError, CliResult};
