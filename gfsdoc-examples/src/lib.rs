//! Documentation example discovery and Makefile fragment generation.
//!
//! Walks directory trees of documentation examples and produces the three
//! Makefile blocks a documentation build consumes:
//!
//! - `DOCS` - HTML pages, generated media and example sources
//! - `EXTRA_DIST` - files shipped in the source distribution
//! - `examples.tex:` - dependencies of the aggregated LaTeX document
//!
//! # Example
//!
//! ```no_run
//! use gfsdoc_examples::{FragmentGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig::load(None)?;
//! let generator = FragmentGenerator::new(config);
//! println!("{}", generator.render(&["doc/examples"])?);
//! # Ok::<(), gfsdoc_examples::GfsdocError>(())
//! ```

mod config;
mod error;
mod example;
mod fragment;
mod generator;

// Re-export main types
pub use config::{GeneratorConfig, InvalidExamplePolicy, ENV_PREFIX};
pub use error::{GfsdocError, Result};
pub use example::{Example, PRIMARY_EXTENSION};
pub use fragment::{ContinuationList, Fragments, CONTINUATION};
pub use generator::FragmentGenerator;
