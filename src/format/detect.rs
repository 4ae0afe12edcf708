//! Format detection for acquisition metadata files.
//!
//! Detection looks only at the file name, never at file contents. A format
//! matches when the file name contains its keyword AND the extension is
//! exactly its suffix:
//!
//! | Format     | Name contains      | Extension |
//! |------------|--------------------|-----------|
//! | BakingTray | `recipe`           | `.yml`    |
//! | mesoSPIM   | `raw_meta`         | `.txt`    |
//! | Cellfinder | `cellfinder_meta`  | `.ini`    |
//!
//! Rules are tried in the order above and the first match wins. Files that
//! match no rule are classified as [`FormatKind::Unsupported`].

use std::path::{Path, PathBuf};

// =============================================================================
// FormatKind
// =============================================================================

/// Detected metadata format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// cellfinder's own INI metadata
    Cellfinder,

    /// BakingTray YAML recipe
    BakingTray,

    /// mesoSPIM line-oriented text metadata
    MesoSpim,

    /// None of the above
    Unsupported,
}

/// Supported formats, in detection order.
pub const DETECTION_ORDER: [FormatKind; 3] = [
    FormatKind::BakingTray,
    FormatKind::MesoSpim,
    FormatKind::Cellfinder,
];

/// Identifiers of the supported formats, as listed in error messages.
pub const SUPPORTED_METADATA_TYPES: [&str; 3] = ["Cellfinder", "BakingTray", "mesoSPIM"];

impl FormatKind {
    /// Get a human-readable name for the format.
    pub const fn name(&self) -> &'static str {
        match self {
            FormatKind::Cellfinder => "Cellfinder",
            FormatKind::BakingTray => "BakingTray",
            FormatKind::MesoSpim => "mesoSPIM",
            FormatKind::Unsupported => "Unsupported",
        }
    }

    /// Substring the file name must contain.
    pub const fn keyword(&self) -> Option<&'static str> {
        match self {
            FormatKind::Cellfinder => Some("cellfinder_meta"),
            FormatKind::BakingTray => Some("recipe"),
            FormatKind::MesoSpim => Some("raw_meta"),
            FormatKind::Unsupported => None,
        }
    }

    /// Extension (with leading dot) the file must have.
    pub const fn suffix(&self) -> Option<&'static str> {
        match self {
            FormatKind::Cellfinder => Some(".ini"),
            FormatKind::BakingTray => Some(".yml"),
            FormatKind::MesoSpim => Some(".txt"),
            FormatKind::Unsupported => None,
        }
    }

    /// Whether this is one of the supported formats.
    pub const fn is_supported(&self) -> bool {
        !matches!(self, FormatKind::Unsupported)
    }
}

// =============================================================================
// MetadataSource
// =============================================================================

/// A metadata file path with its name and extension resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataSource {
    path: PathBuf,
    name: String,
    suffix: String,
}

impl MetadataSource {
    /// Resolve the name and extension of `path`.
    ///
    /// The suffix includes its leading dot and is empty if the file has no
    /// extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let suffix = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        MetadataSource { path, name, suffix }
    }

    /// Full path to the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name, including extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File extension with leading dot, or empty.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether this file satisfies the rule for `kind`.
    pub fn matches(&self, kind: FormatKind) -> bool {
        match (kind.keyword(), kind.suffix()) {
            (Some(keyword), Some(suffix)) => self.name.contains(keyword) && self.suffix == suffix,
            _ => false,
        }
    }
}

// =============================================================================
// Format Detection
// =============================================================================

/// Classify a metadata file by name and extension.
pub fn classify(source: &MetadataSource) -> FormatKind {
    DETECTION_ORDER
        .into_iter()
        .find(|kind| source.matches(*kind))
        .unwrap_or(FormatKind::Unsupported)
}

// =============================================================================
// Tests
// =============================================================================
