//! cellfinder metadata reader.
//!
//! cellfinder writes its own small INI file alongside each acquisition:
//!
//! ```text
//! [voxels]
//! x = 2
//! y = 2
//! z = 5
//!
//! [planes]
//! num_planes = 1500
//! ```
//!
//! Every measurement is read directly from a key, with no derivation.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{MetadataError, ParseError};
use crate::metadata::AcquisitionMetadata;

use super::parse::IniDocument;
use super::validation::{require_positive_float, require_positive_int};

/// Section holding the voxel sizes.
const VOXELS_SECTION: &str = "voxels";

/// Section holding the plane count.
const PLANES_SECTION: &str = "planes";

/// Reader for cellfinder metadata files.
#[derive(Debug, Clone)]
pub struct CellfinderMetadata {
    path: PathBuf,
    document: IniDocument,
}

impl CellfinderMetadata {
    /// Open and parse a cellfinder metadata file.
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        let document = IniDocument::read(path)?;
        Ok(Self::from_document(path, document))
    }

    /// Wrap an already-parsed document.
    pub fn from_document(path: &Path, document: IniDocument) -> Self {
        CellfinderMetadata {
            path: path.to_path_buf(),
            document,
        }
    }

    /// Path of the metadata file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed INI document.
    pub fn document(&self) -> &IniDocument {
        &self.document
    }

    fn voxel(&self, axis: &str, field: &str) -> Result<f64, MetadataError> {
        let value = self.document.get_float(VOXELS_SECTION, axis)?;
        let value = require_positive_float(value, field)?;
        trace!(field, value, "cellfinder measurement");
        Ok(value)
    }
}

impl AcquisitionMetadata for CellfinderMetadata {
    fn x_pixel_um(&self) -> Result<f64, MetadataError> {
        self.voxel("x", "x_pixel_um")
    }

    fn y_pixel_um(&self) -> Result<f64, MetadataError> {
        self.voxel("y", "y_pixel_um")
    }

    fn z_pixel_um(&self) -> Result<f64, MetadataError> {
        self.voxel("z", "z_pixel_um")
    }

    fn num_planes(&self) -> Result<u64, MetadataError> {
        let value = self.document.get_int(PLANES_SECTION, "num_planes")?;
        require_positive_int(value, "num_planes")
    }
}

// =============================================================================
// Tests
// =============================================================================
