use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the underlying file parsers.
///
/// These describe files that could not be read or are syntactically broken.
/// They are surfaced unchanged through [`MetadataError::Parse`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be opened or read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed sectioned key/value (INI) syntax
    #[error("INI syntax error in {} at line {line}: {message}", .path.display())]
    Ini {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Malformed YAML document
    #[error("YAML syntax error in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Requested line index is past the end of the file
    #[error("Line {index} out of range: file has {len} lines")]
    LineOutOfRange { index: usize, len: usize },
}

/// Errors returned when classifying a metadata file or reading a measurement.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// File name and extension matched none of the known metadata formats
    #[error(
        "The metadata type of file: '{name}' is not yet supported. \
         Please supply one of: {} or enter metadata manually.",
        .supported.join(", ")
    )]
    UnsupportedFormat {
        name: String,
        supported: Vec<&'static str>,
    },

    /// A required section, key or marker line is absent
    #[error("Missing field '{field}' in {origin}")]
    MissingField { field: String, origin: String },

    /// A value is present but not a valid measurement
    #[error("Invalid measurement for '{field}': {message}")]
    InvalidMeasurement { field: String, message: String },

    /// The file itself could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl MetadataError {
    /// Build a [`MetadataError::MissingField`].
    pub fn missing(field: impl Into<String>, origin: impl Into<String>) -> Self {
        MetadataError::MissingField {
            field: field.into(),
            origin: origin.into(),
        }
    }

    /// Build a [`MetadataError::InvalidMeasurement`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        MetadataError::InvalidMeasurement {
            field: field.into(),
            message: message.into(),
        }
    }
}
