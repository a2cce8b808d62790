//! Makefile fragment building blocks.
//!
//! Every list is rendered as a sequence of line-continuation entries, each of
//! the exact shape `\` + newline + tab + path, concatenated with no separator.
//! Prefixed with `VAR = ` this yields one path per line, joined into a single
//! logical Makefile statement.

use std::fmt;

/// Prefix written before every entry of a continuation list.
pub const CONTINUATION: &str = "\\\n\t";

/// An append-only list of paths rendered with Makefile line continuations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinuationList {
    entries: Vec<String>,
}

impl ContinuationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry to the end of the list.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Append every entry of `other`, preserving its order.
    pub fn extend_from(&mut self, other: &ContinuationList) {
        self.entries.extend(other.entries.iter().cloned());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }
}

impl fmt::Display for ContinuationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{CONTINUATION}{entry}")?;
        }
        Ok(())
    }
}

/// The three lists accumulated over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    /// Documentation artifacts: HTML pages and generated media.
    pub docs: ContinuationList,
    /// Files shipped in the source distribution.
    pub dists: ContinuationList,
    /// Dependencies of the aggregated LaTeX target.
    pub depends: ContinuationList,
}

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full `DOCS` value: documentation artifacts followed by every
    /// distributed file.
    pub fn doc_list(&self) -> ContinuationList {
        let mut all = self.docs.clone();
        all.extend_from(&self.dists);
        all
    }

    /// Render the three Makefile blocks separated by blank lines.
    ///
    /// The result carries no trailing newline.
    pub fn render(&self, target: &str) -> String {
        format!(
            "DOCS = {}\n\nEXTRA_DIST += {}\n\n{}: {}",
            self.doc_list(),
            self.dists,
            target,
            self.depends
        )
    }
}
