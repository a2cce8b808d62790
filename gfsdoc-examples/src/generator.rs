//! Walks example trees and accumulates Makefile fragments.

use crate::config::{GeneratorConfig, InvalidExamplePolicy};
use crate::error::{GfsdocError, Result};
use crate::example::Example;
use crate::fragment::Fragments;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Suffix of the HTML page generated for every example.
const HTML_SUFFIX: &str = ".html";

/// Turns example directories into `DOCS`, `EXTRA_DIST` and dependency lists.
#[derive(Debug, Clone, Default)]
pub struct FragmentGenerator {
    config: GeneratorConfig,
}

impl FragmentGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Walk every root in order and collect the fragments of every example found.
    ///
    /// Directories are visited top-down with siblings sorted by name. Nothing
    /// is returned unless the whole walk succeeds.
    pub fn generate<P: AsRef<Path>>(&self, roots: &[P]) -> Result<Fragments> {
        let mut fragments = Fragments::new();
        let mut examples = 0usize;

        for root in roots {
            let root = root.as_ref();
            debug!("Walking example root: {}", root.display());

            let walker = WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| {
                    let excluded = self.config.is_excluded(entry.path());
                    if excluded {
                        debug!("Skipping excluded directory: {}", entry.path().display());
                    }
                    !excluded
                });

            for entry in walker {
                let entry = entry.map_err(|e| GfsdocError::walk(root, e))?;
                if !entry.file_type().is_dir() {
                    continue;
                }
                debug!("Visiting directory: {}", entry.path().display());

                match Example::from_dir(entry.path()) {
                    Ok(example) => {
                        self.add_example(&example, &mut fragments);
                        examples += 1;
                    }
                    Err(e) if e.is_invalid_example() => match self.config.invalid_examples {
                        InvalidExamplePolicy::Skip => warn!("Skipping directory: {}", e),
                        InvalidExamplePolicy::Fail => return Err(e),
                    },
                    Err(e) => return Err(e),
                }
            }
        }

        info!(
            examples,
            roots = roots.len(),
            policy = %self.config.invalid_examples,
            "Generated example fragments"
        );
        Ok(fragments)
    }

    /// Append the entries contributed by a single example.
    pub fn add_example(&self, example: &Example, fragments: &mut Fragments) {
        let primary = example.primary_file();
        fragments.docs.push(format!("{primary}{HTML_SUFFIX}"));
        fragments.dists.push(primary.clone());
        fragments.depends.push(primary);

        for file in example
            .required
            .iter()
            .filter(|f| self.config.is_distributed(f))
        {
            fragments.dists.push(example.file_path(file));
        }

        for file in &example.generated {
            let path = example.file_path(file);
            if self.config.is_doc_media(file) {
                fragments.docs.push(path.clone());
            }
            fragments.depends.push(path);
        }
    }

    /// Generate and render in one step.
    pub fn render<P: AsRef<Path>>(&self, roots: &[P]) -> Result<String> {
        let fragments = self.generate(roots)?;
        Ok(fragments.render(&self.config.depends_target))
    }
}
