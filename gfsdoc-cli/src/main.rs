//! gfsdoc-depend - print Makefile fragments for documentation examples.
//!
//! Usage: `gfsdoc-depend [--debug] [--strict] [--config FILE] <ROOT>...`
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error (traversal, invalid example in strict mode, config, output)

use std::io;

use clap::Parser;
use gfsdoc::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("gfsdoc=debug,gfsdoc_examples=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    let result = gfsdoc::run(&cli, &mut io::stdout().lock());
    std::process::exit(result_to_exit(result));
}

/// Convert a `Result<(), E: Display>` to an exit code.
fn result_to_exit<E: std::fmt::Display>(result: Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
