//! Sectioned key/value (INI) documents.
//!
//! Supports the subset of INI syntax used by cellfinder metadata files:
//!
//! ```text
//! [voxels]
//! x = 2
//! y: 2
//! ; comment
//! [planes]
//! num_planes = 1500
//! ```
//!
//! Keys are case-insensitive and stored lowercased. Section names are
//! case-sensitive. Keys in a `[DEFAULT]` section are visible from every
//! other section. Indented lines continue the previous value.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{MetadataError, ParseError};
use crate::format::validation::ValidationError;

/// Name of the section whose keys every other section inherits.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// A parsed INI document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IniDocument {
    sections: HashMap<String, HashMap<String, String>>,
    defaults: HashMap<String, String>,
    origin: String,
}

impl IniDocument {
    /// Read and parse an INI file.
    pub fn read(path: &Path) -> Result<Self, ParseError> {
        let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse INI text. `path` is used only in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ParseError> {
        let mut document = IniDocument {
            origin: display_name(path),
            ..Default::default()
        };

        let syntax_error = |line: usize, message: &str| ParseError::Ini {
            path: path.to_path_buf(),
            line,
            message: message.to_string(),
        };

        // Current section name (None before the first header) and last key
        let mut section: Option<String> = None;
        let mut last_key: Option<String> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                last_key = None;
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            // Continuation of the previous value
            let indented = raw.starts_with(' ') || raw.starts_with('\t');
            if indented {
                if let (Some(name), Some(key)) = (section.as_deref(), last_key.as_deref()) {
                    if let Some(value) = document.section_mut(name).get_mut(key) {
                        if !value.is_empty() {
                            value.push('\n');
                        }
                        value.push_str(trimmed);
                        continue;
                    }
                }
            }

            if let Some(header) = trimmed.strip_prefix('[') {
                // Anything after the closing bracket is ignored
                let end = header
                    .rfind(']')
                    .ok_or_else(|| syntax_error(line_no, "unterminated section header"))?;
                let name = header[..end].trim();
                if name.is_empty() {
                    return Err(syntax_error(line_no, "empty section name"));
                }
                if name != DEFAULT_SECTION && document.sections.contains_key(name) {
                    return Err(syntax_error(
                        line_no,
                        &format!("section '{}' already exists", name),
                    ));
                }
                if name != DEFAULT_SECTION {
                    document.sections.insert(name.to_string(), HashMap::new());
                }
                section = Some(name.to_string());
                last_key = None;
                continue;
            }

            let name = section
                .as_deref()
                .ok_or_else(|| syntax_error(line_no, "file contains no section headers"))?;

            let (key, value) =
                split_key_value(trimmed).ok_or_else(|| syntax_error(line_no, "expected 'key = value'"))?;
            let key = key.to_lowercase();
            if key.is_empty() {
                return Err(syntax_error(line_no, "empty key"));
            }

            let entries = document.section_mut(name);
            if entries.contains_key(&key) {
                return Err(syntax_error(
                    line_no,
                    &format!("option '{}' in section '{}' already exists", key, name),
                ));
            }
            entries.insert(key.clone(), value.to_string());
            last_key = Some(key);
        }

        Ok(document)
    }

    fn section_mut(&mut self, name: &str) -> &mut HashMap<String, String> {
        if name == DEFAULT_SECTION {
            &mut self.defaults
        } else {
            self.sections.entry(name.to_string()).or_default()
        }
    }

    /// Whether a (non-default) section exists.
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Names of all non-default sections, sorted.
    pub fn section_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up a raw value, falling back to the `DEFAULT` section.
    ///
    /// Returns `None` if the section or the key does not exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let entries = self.sections.get(section)?;
        let key = key.to_lowercase();
        entries
            .get(&key)
            .or_else(|| self.defaults.get(&key))
            .map(String::as_str)
    }

    /// Look up a value that must exist.
    ///
    /// An empty value reads as `None`.
    fn require(&self, section: &str, key: &str) -> Result<Option<&str>, MetadataError> {
        if !self.has_section(section) {
            return Err(MetadataError::missing(
                format!("[{}]", section),
                &self.origin,
            ));
        }
        let value = self
            .get(section, key)
            .ok_or_else(|| MetadataError::missing(format!("{}.{}", section, key), &self.origin))?;
        Ok(Some(value.trim()).filter(|v| !v.is_empty()))
    }

    /// Read a float value.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - key present with a numeric value
    /// * `Ok(None)` - key present with an empty value
    /// * `Err(MissingField)` - section or key absent
    /// * `Err(InvalidMeasurement)` - value is not a number
    pub fn get_float(&self, section: &str, key: &str) -> Result<Option<f64>, MetadataError> {
        self.require(section, key)?
            .map(|text| {
                text.parse::<f64>().map_err(|_| {
                    ValidationError::NotANumber {
                        value: text.to_string(),
                    }
                    .for_field(&format!("{}.{}", section, key))
                })
            })
            .transpose()
    }

    /// Read an integer value. Same contract as [`IniDocument::get_float`].
    pub fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>, MetadataError> {
        self.require(section, key)?
            .map(|text| {
                text.parse::<i64>().map_err(|_| {
                    ValidationError::NotANumber {
                        value: text.to_string(),
                    }
                    .for_field(&format!("{}.{}", section, key))
                })
            })
            .transpose()
    }
}

/// Split `key = value` or `key: value` at the first delimiter.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let pos = line.find(['=', ':'])?;
    Some((line[..pos].trim(), line[pos + 1..].trim()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// =============================================================================
// Tests
// =============================================================================
