//! Structured (YAML) documents.
//!
//! BakingTray recipes are YAML mappings nested a few levels deep. Values of
//! interest may be written as numbers or as quoted numeric strings, so the
//! lookup helpers accept both.

use std::fs::File;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{MetadataError, ParseError};
use crate::format::validation::ValidationError;

/// A parsed YAML document.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlDocument {
    root: Value,
    origin: String,
}

impl YamlDocument {
    /// Read and parse a YAML file.
    ///
    /// The file handle is dropped as soon as deserialization finishes.
    pub fn read(path: &Path) -> Result<Self, ParseError> {
        let root = {
            let file = File::open(path).map_err(|source| ParseError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_yaml::from_reader(file).map_err(|source| ParseError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        };

        Ok(Self::from_value(root, path))
    }

    /// Parse YAML text. `path` is used only in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ParseError> {
        let root = serde_yaml::from_str(text).map_err(|source| ParseError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_value(root, path))
    }

    fn from_value(root: Value, path: &Path) -> Self {
        let origin = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        YamlDocument { root, origin }
    }

    /// The document root.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Walk a key path from the root.
    ///
    /// Returns `None` if any segment is missing or a parent is not a mapping.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.root, |node, key| node.as_mapping()?.get(*key))
    }

    /// Read a float at `path`.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - a number, or a string holding a number
    /// * `Ok(None)` - the key is present with a `null` value
    /// * `Err(MissingField)` - some segment of the path is absent
    /// * `Err(InvalidMeasurement)` - the value is not numeric
    pub fn get_float(&self, path: &[&str]) -> Result<Option<f64>, MetadataError> {
        let field = path.join(".");
        let value = self
            .lookup(path)
            .ok_or_else(|| MetadataError::missing(&field, &self.origin))?;

        match value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| not_a_number(n.to_string(), &field)),
            Value::String(text) => text
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| not_a_number(text.clone(), &field)),
            other => Err(not_a_number(format!("{:?}", other), &field)),
        }
    }
}

fn not_a_number(value: String, field: &str) -> MetadataError {
    ValidationError::NotANumber { value }.for_field(field)
}

// =============================================================================
// Tests
// =============================================================================
