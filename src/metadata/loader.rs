//! Opening metadata files with format auto-detection.
//!
//! [`get_acquisition_metadata`] is the entry point: it classifies the file by
//! name, parses it with the matching parser and wraps the result in the
//! matching reader.
//!
//! # Example
//!
//! ```no_run
//! use micrometa::metadata::{get_acquisition_metadata, AcquisitionMetadata};
//!
//! let metadata = get_acquisition_metadata("brain/cellfinder_metadata.ini")?;
//! println!("{} planes", metadata.num_planes()?);
//! # Ok::<(), micrometa::MetadataError>(())
//! ```

use std::path::Path;

use tracing::{debug, warn};

use crate::error::MetadataError;
use crate::format::{
    classify, BakingTrayMetadata, CellfinderMetadata, FormatKind, MesoSpimMetadata,
    MetadataSource, SUPPORTED_METADATA_TYPES,
};

use super::reader::AcquisitionMetadata;

// =============================================================================
// Metadata
// =============================================================================

/// Metadata from any supported format.
///
/// A closed union over the per-format readers. Every variant exposes the same
/// four measurements through [`AcquisitionMetadata`].
#[derive(Debug, Clone)]
pub enum Metadata {
    /// cellfinder INI metadata
    Cellfinder(CellfinderMetadata),

    /// BakingTray YAML recipe
    BakingTray(BakingTrayMetadata),

    /// mesoSPIM text metadata
    MesoSpim(MesoSpimMetadata),
}

impl Metadata {
    /// Get the detected format.
    pub fn format(&self) -> FormatKind {
        match self {
            Metadata::Cellfinder(_) => FormatKind::Cellfinder,
            Metadata::BakingTray(_) => FormatKind::BakingTray,
            Metadata::MesoSpim(_) => FormatKind::MesoSpim,
        }
    }

    /// Path of the metadata file.
    pub fn path(&self) -> &Path {
        match self {
            Metadata::Cellfinder(m) => m.path(),
            Metadata::BakingTray(m) => m.path(),
            Metadata::MesoSpim(m) => m.path(),
        }
    }

    fn inner(&self) -> &dyn AcquisitionMetadata {
        match self {
            Metadata::Cellfinder(m) => m,
            Metadata::BakingTray(m) => m,
            Metadata::MesoSpim(m) => m,
        }
    }
}

impl AcquisitionMetadata for Metadata {
    fn x_pixel_um(&self) -> Result<f64, MetadataError> {
        self.inner().x_pixel_um()
    }

    fn y_pixel_um(&self) -> Result<f64, MetadataError> {
        self.inner().y_pixel_um()
    }

    fn z_pixel_um(&self) -> Result<f64, MetadataError> {
        self.inner().z_pixel_um()
    }

    fn num_planes(&self) -> Result<u64, MetadataError> {
        self.inner().num_planes()
    }
}

impl From<CellfinderMetadata> for Metadata {
    fn from(metadata: CellfinderMetadata) -> Self {
        Metadata::Cellfinder(metadata)
    }
}

impl From<BakingTrayMetadata> for Metadata {
    fn from(metadata: BakingTrayMetadata) -> Self {
        Metadata::BakingTray(metadata)
    }
}

impl From<MesoSpimMetadata> for Metadata {
    fn from(metadata: MesoSpimMetadata) -> Self {
        Metadata::MesoSpim(metadata)
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Open a metadata file, detecting its format from its name.
///
/// # Errors
/// * `MetadataError::UnsupportedFormat` - name/extension match no known format
/// * `MetadataError::Parse` - the file could not be read or parsed
pub fn get_acquisition_metadata(path: impl AsRef<Path>) -> Result<Metadata, MetadataError> {
    open_source(&MetadataSource::new(path.as_ref()))
}

/// Open an already-resolved metadata source.
pub fn open_source(source: &MetadataSource) -> Result<Metadata, MetadataError> {
    let path = source.path();

    let metadata: Metadata = match classify(source) {
        FormatKind::BakingTray => BakingTrayMetadata::open(path)?.into(),
        FormatKind::MesoSpim => MesoSpimMetadata::open(path)?.into(),
        FormatKind::Cellfinder => CellfinderMetadata::open(path)?.into(),
        FormatKind::Unsupported => {
            warn!(file = %source.name(), "unsupported metadata file");
            return Err(MetadataError::UnsupportedFormat {
                name: source.name().to_string(),
                supported: SUPPORTED_METADATA_TYPES.to_vec(),
            });
        }
    };

    debug!(
        path = %path.display(),
        format = metadata.format().name(),
        "opened acquisition metadata"
    );
    Ok(metadata)
}

// =============================================================================
// Tests
// =============================================================================
