//! Error handling utilities for the CLI.

use growlist::AllocationError;
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid operation `{op}`: {reason}")]
    InvalidOp { op: String, reason: &'static str },

    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError) -> ! {
    tracing::debug!(?error, "command failed");
    eprintln!("error: {error}");
    std::process::exit(1);
}
