//! growlist CLI - drive a growable array from the command line.

use clap::Parser;
use growlist_cli::cli::{Cli, Command};
use growlist_cli::commands;
use growlist_cli::common::error::render_and_exit;

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    let result = match cli.command {
        Command::Append(args) => commands::append::run(args, &mut stdout),
        Command::Run(args) => commands::run::run(args, &mut stdout),
    };

    if let Err(e) = result {
        render_and_exit(e);
    }
}
