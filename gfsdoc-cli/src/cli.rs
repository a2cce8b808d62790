//! CLI definition for `gfsdoc-depend`.

use std::path::PathBuf;

use clap::Parser;

/// Emit Makefile fragments for trees of documentation examples
///
/// Prints `DOCS`, `EXTRA_DIST` and `examples.tex` dependency lists for every
/// example directory found under the given roots.
#[derive(Parser, Debug)]
#[command(name = "gfsdoc-depend")]
#[command(version)]
#[command(about = "Emit Makefile fragments for documentation example trees")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Abort when a directory is not a valid example instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directories to search for examples
    #[arg(required = true, value_name = "ROOT")]
    pub roots: Vec<PathBuf>,
}
