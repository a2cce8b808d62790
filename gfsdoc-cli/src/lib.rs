//! gfsdoc - Makefile fragments for documentation examples.
//!
//! Library half of the `gfsdoc-depend` binary: argument definitions and the
//! run loop, kept here so they can be exercised without spawning a process.

mod cli;

pub use cli::Cli;

use std::io::Write;

use gfsdoc_examples::{FragmentGenerator, GeneratorConfig, InvalidExamplePolicy, Result};

/// Resolve the generator configuration for a parsed command line.
pub fn resolve_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = GeneratorConfig::load(cli.config.as_deref())?;
    if cli.strict {
        tracing::debug!("--strict given, invalid examples abort the run");
        config.invalid_examples = InvalidExamplePolicy::Fail;
    }
    Ok(config)
}

/// Generate the fragments for `cli.roots` and write them to `out`.
///
/// Output is written only once every root has been walked successfully.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = resolve_config(cli)?;
    let rendered = FragmentGenerator::new(config).render(cli.roots.as_slice())?;
    writeln!(out, "{rendered}")?;
    out.flush()?;
    Ok(())
}
