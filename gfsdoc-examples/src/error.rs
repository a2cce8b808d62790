//! Error types for example discovery and fragment generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GfsdocError.
pub type Result<T> = std::result::Result<T, GfsdocError>;

/// Errors that can occur while discovering examples or generating fragments.
#[derive(Error, Debug)]
pub enum GfsdocError {
    /// Directory does not hold a primary `<name>.gfs` file.
    #[error("'{path}' is not an example: missing primary file '{primary}'")]
    NotAnExample { path: PathBuf, primary: PathBuf },

    /// Failed to read the primary example file.
    #[error("failed to read example file '{path}': {source}")]
    ExampleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required or generated entry is not a plain filename.
    #[error("example '{path}' lists '{name}' which is not a plain filename")]
    InvalidFileName { path: PathBuf, name: String },

    /// Path cannot be rendered into a Makefile fragment.
    #[error("path '{path}' is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },

    /// Traversal of a root directory failed.
    #[error("failed to walk '{root}': {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Configuration could not be loaded.
    #[error("failed to load configuration: {source}")]
    Config {
        #[source]
        source: Box<figment::Error>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GfsdocError {
    /// Create a NotAnExample error.
    pub fn not_an_example(path: impl Into<PathBuf>, primary: impl Into<PathBuf>) -> Self {
        Self::NotAnExample {
            path: path.into(),
            primary: primary.into(),
        }
    }

    /// Create an ExampleRead error.
    pub fn example_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ExampleRead {
            path: path.into(),
            source,
        }
    }

    /// Create a Walk error.
    pub fn walk(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Walk {
            root: root.into(),
            source,
        }
    }

    /// Whether the error came from building an example descriptor.
    ///
    /// These are the failures governed by
    /// [`InvalidExamplePolicy`](crate::InvalidExamplePolicy); everything else
    /// always aborts the run.
    pub fn is_invalid_example(&self) -> bool {
        matches!(
            self,
            Self::NotAnExample { .. }
                | Self::ExampleRead { .. }
                | Self::InvalidFileName { .. }
                | Self::NonUtf8Path { .. }
        )
    }
}

impl From<figment::Error> for GfsdocError {
    fn from(error: figment::Error) -> Self {
        Self::Config {
            source: Box::new(error),
        }
    }
}
