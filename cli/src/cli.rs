//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use growlist::{ArrayOptions, DEFAULT_GROWTH_FACTOR};

/// growlist - drive a growable array from the command line
#[derive(Parser, Debug)]
#[command(name = "growlist", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append integers one by one, reporting every growth
    Append(AppendArgs),

    /// Run a script of array operations
    Run(RunArgs),
}

/// Options shared by every command that builds an array.
#[derive(Args, Debug, Clone, Copy)]
pub struct ArrayArgs {
    /// Initial capacity (values below 4 are raised to 4)
    #[arg(long, default_value_t = 0)]
    pub capacity: usize,

    /// Capacity multiplier applied on growth
    #[arg(long, default_value_t = DEFAULT_GROWTH_FACTOR, allow_negative_numbers = true)]
    pub growth_factor: f64,
}

impl ArrayArgs {
    pub fn options(&self) -> ArrayOptions {
        ArrayOptions::default()
            .with_initial_capacity(self.capacity)
            .with_growth_factor(self.growth_factor)
    }
}

/// Arguments for the `append` command.
#[derive(Args, Debug)]
pub struct AppendArgs {
    #[command(flatten)]
    pub array: ArrayArgs,

    /// Values to append, in order
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub array: ArrayArgs,

    /// Operations: append:<v>, get:<i>, set:<i>=<v>, top, pop, len,
    /// capacity, factor:<f>
    #[arg(required = true, allow_hyphen_values = true)]
    pub ops: Vec<String>,
}
