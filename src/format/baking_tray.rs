//! BakingTray recipe reader.
//!
//! BakingTray (serial-section two-photon tomography) stores its acquisition
//! settings in a YAML "recipe". The relevant parts look like:
//!
//! ```text
//! StitchingParameters:
//!   VoxelSize:
//!     X: 2.19
//!     Y: 2.14
//! mosaic:
//!   sliceThickness: 0.05   # millimetres
//!   numOpticalPlanes: 10
//!   numSections: 200
//! ```
//!
//! # Derived Values
//!
//! The recipe does not store a Z voxel size or a total plane count directly:
//!
//! - `z_pixel_um = 1000 * sliceThickness / numOpticalPlanes`
//!   (slice thickness is in millimetres)
//! - `num_planes = numSections * numOpticalPlanes`
//!
//! A zero `numOpticalPlanes` makes the Z size undefined and is rejected.
//! A non-integral plane product is also rejected rather than truncated.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{MetadataError, ParseError};
use crate::metadata::AcquisitionMetadata;

use super::parse::YamlDocument;
use super::validation::{integral_count, require_positive_float, require_positive_int};

/// Micrometres per millimetre.
pub const UM_PER_MM: f64 = 1000.0;

const VOXEL_SIZE_X: [&str; 3] = ["StitchingParameters", "VoxelSize", "X"];
const VOXEL_SIZE_Y: [&str; 3] = ["StitchingParameters", "VoxelSize", "Y"];
const SLICE_THICKNESS: [&str; 2] = ["mosaic", "sliceThickness"];
const NUM_OPTICAL_PLANES: [&str; 2] = ["mosaic", "numOpticalPlanes"];
const NUM_SECTIONS: [&str; 2] = ["mosaic", "numSections"];

/// Reader for BakingTray recipe files.
#[derive(Debug, Clone)]
pub struct BakingTrayMetadata {
    path: PathBuf,
    document: YamlDocument,
}

impl BakingTrayMetadata {
    /// Open and parse a BakingTray recipe.
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        let document = YamlDocument::read(path)?;
        Ok(Self::from_document(path, document))
    }

    /// Wrap an already-parsed document.
    pub fn from_document(path: &Path, document: YamlDocument) -> Self {
        BakingTrayMetadata {
            path: path.to_path_buf(),
            document,
        }
    }

    /// Path of the recipe file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed YAML document.
    pub fn document(&self) -> &YamlDocument {
        &self.document
    }

    /// Read a float that must be present and not `null`.
    fn required(&self, key: &[&str], field: &str) -> Result<f64, MetadataError> {
        let value = self.document.get_float(key)?;
        value.ok_or_else(|| {
            MetadataError::invalid(field, format!("{} is null", key.join(".")))
        })
    }
}

impl AcquisitionMetadata for BakingTrayMetadata {
    fn x_pixel_um(&self) -> Result<f64, MetadataError> {
        let value = self.document.get_float(&VOXEL_SIZE_X)?;
        require_positive_float(value, "x_pixel_um")
    }

    fn y_pixel_um(&self) -> Result<f64, MetadataError> {
        let value = self.document.get_float(&VOXEL_SIZE_Y)?;
        require_positive_float(value, "y_pixel_um")
    }

    fn z_pixel_um(&self) -> Result<f64, MetadataError> {
        let slice_thickness = self.required(&SLICE_THICKNESS, "z_pixel_um")?;
        let num_optical_planes = self.required(&NUM_OPTICAL_PLANES, "z_pixel_um")?;

        if num_optical_planes == 0.0 {
            return Err(MetadataError::invalid(
                "z_pixel_um",
                "division by zero: mosaic.numOpticalPlanes is 0",
            ));
        }

        let pixel_um = UM_PER_MM * slice_thickness / num_optical_planes;
        trace!(slice_thickness, num_optical_planes, pixel_um, "BakingTray z size");
        require_positive_float(Some(pixel_um), "z_pixel_um")
    }

    fn num_planes(&self) -> Result<u64, MetadataError> {
        let num_sections = self.required(&NUM_SECTIONS, "num_planes")?;
        let num_optical_planes = self.required(&NUM_OPTICAL_PLANES, "num_planes")?;

        let product = num_sections * num_optical_planes;
        let count = integral_count(product).map_err(|e| e.for_field("num_planes"))?;
        require_positive_int(Some(count), "num_planes")
    }
}

// =============================================================================
// Tests
// =============================================================================
