//! Example descriptors built from documentation example directories.
//!
//! An example directory `foo/` holds a primary simulation file `foo/foo.gfs`
//! whose leading comment block describes the example:
//!
//! ```text
//! # Title: Flow past a cylinder
//! #
//! # Description:
//! #
//! # A classic benchmark.
//! #
//! # Author: Jane Doe
//! # Command: gerris2D cylinder.gfs
//! # Version: 1.3.2
//! # Required files: init.gfs S60-scaled.gts
//! # Running time: 5 minutes
//! # Generated files: velocity.mp4 vorticity.png
//! ```

use crate::error::{GfsdocError, Result};
use std::path::Path;

/// Extension of the primary example file.
pub const PRIMARY_EXTENSION: &str = "gfs";

/// A documentation example discovered on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example {
    /// Canonical identifier, the basename of the example directory.
    pub name: String,
    /// Directory holding the example, without trailing separators.
    pub path: String,
    /// Files the example needs as inputs, relative to `path`.
    pub required: Vec<String>,
    /// Files building the example produces, relative to `path`.
    pub generated: Vec<String>,
    pub title: String,
    pub description: String,
    pub author: String,
    pub command: String,
    pub version: String,
    pub running_time: String,
}

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Title,
    Description,
    Author,
    Command,
    Version,
    RunningTime,
    Required,
    Generated,
}

impl Field {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "Title" => Some(Self::Title),
            "Description" => Some(Self::Description),
            "Author" => Some(Self::Author),
            "Command" => Some(Self::Command),
            "Version" => Some(Self::Version),
            "Running time" => Some(Self::RunningTime),
            "Required files" => Some(Self::Required),
            "Generated files" => Some(Self::Generated),
            _ => None,
        }
    }
}

impl Example {
    /// Build the descriptor for the example living in `dir`.
    ///
    /// Fails with [`GfsdocError::NotAnExample`] when the directory has no
    /// `<basename>.gfs` file.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path_str = dir
            .to_str()
            .ok_or_else(|| GfsdocError::NonUtf8Path {
                path: dir.to_path_buf(),
            })?;
        let path = trim_trailing_separators(path_str).to_string();

        let name = dir
            .file_name()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .ok_or_else(|| GfsdocError::not_an_example(dir, dir))?;

        let primary = dir.join(format!("{name}.{PRIMARY_EXTENSION}"));
        if !primary.is_file() {
            return Err(GfsdocError::not_an_example(dir, primary));
        }

        let bytes = std::fs::read(&primary).map_err(|e| GfsdocError::example_read(&primary, e))?;
        let content = String::from_utf8_lossy(&bytes);

        let mut example = Self {
            name,
            path,
            ..Self::default()
        };
        example.parse_header(&content);
        example.validate(dir)?;

        tracing::debug!(
            name = %example.name,
            title = %example.title,
            required = example.required.len(),
            generated = example.generated.len(),
            "Loaded example"
        );
        Ok(example)
    }

    /// Path of the primary file, `<path>/<name>.gfs`.
    pub fn primary_file(&self) -> String {
        format!("{}/{}.{}", self.path, self.name, PRIMARY_EXTENSION)
    }

    /// Path of a file belonging to this example, `<path>/<file>`.
    pub fn file_path(&self, file: &str) -> String {
        format!("{}/{}", self.path, file)
    }

    fn parse_header(&mut self, content: &str) {
        let mut current: Option<Field> = None;
        let mut description: Vec<&str> = Vec::new();

        for line in content.lines() {
            let Some(rest) = line.strip_prefix('#') else {
                break;
            };
            let text = rest.strip_prefix(' ').unwrap_or(rest);

            if let Some((key, value)) = text.split_once(':') {
                if let Some(field) = Field::from_key(key.trim()) {
                    current = Some(field);
                    self.apply(field, value, &mut description);
                    continue;
                }
            }

            match current {
                Some(Field::Description) => description.push(text),
                // Lists continue only on indented lines.
                Some(field @ (Field::Required | Field::Generated)) => {
                    if text.starts_with(char::is_whitespace) && !text.trim().is_empty() {
                        self.apply(field, text, &mut description);
                    } else {
                        current = None;
                    }
                }
                _ => {}
            }
        }

        self.description = description.join("\n").trim().to_string();
    }

    fn apply<'a>(&mut self, field: Field, value: &'a str, description: &mut Vec<&'a str>) {
        let single = value.trim().to_string();
        match field {
            Field::Title => self.title = single,
            Field::Author => self.author = single,
            Field::Command => self.command = single,
            Field::Version => self.version = single,
            Field::RunningTime => self.running_time = single,
            Field::Description => description.push(value),
            Field::Required => self
                .required
                .extend(value.split_whitespace().map(str::to_string)),
            Field::Generated => self
                .generated
                .extend(value.split_whitespace().map(str::to_string)),
        }
    }

    fn validate(&self, dir: &Path) -> Result<()> {
        let bad = self
            .required
            .iter()
            .chain(&self.generated)
            .find(|f| f.contains(['/', '\\']));
        match bad {
            Some(name) => Err(GfsdocError::InvalidFileName {
                path: dir.to_path_buf(),
                name: name.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && !path.is_empty() {
        "/"
    } else {
        trimmed
    }
}
