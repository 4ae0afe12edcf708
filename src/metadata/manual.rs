//! Manually entered metadata.
//!
//! When a metadata file is unsupported, or one of its values is wrong, the
//! caller can supply measurements by hand. Manual values override the file
//! axis by axis; unset values fall back to the file.

use crate::error::MetadataError;
use crate::format::validation::{check_positive_float, check_positive_int};

use super::reader::{AcquisitionMetadata, VoxelSize};

/// Origin reported when a value is missing and no file was given.
const MANUAL_ORIGIN: &str = "manual entry";

/// Measurements supplied by hand. Any subset may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualMetadata {
    /// Voxel size along X in micrometres
    pub x_pixel_um: Option<f64>,

    /// Voxel size along Y in micrometres
    pub y_pixel_um: Option<f64>,

    /// Voxel size along Z in micrometres
    pub z_pixel_um: Option<f64>,

    /// Total number of imaging planes
    pub num_planes: Option<u64>,
}

impl ManualMetadata {
    /// Whether all four measurements are set.
    pub fn is_complete(&self) -> bool {
        self.x_pixel_um.is_some()
            && self.y_pixel_um.is_some()
            && self.z_pixel_um.is_some()
            && self.num_planes.is_some()
    }
}

/// Combine manual values with (optional) file metadata.
///
/// Manual values are validated with absence allowed; each absent manual
/// value is read from `metadata`. Without `metadata`, every value must be
/// set manually.
pub fn resolve_voxel_size<M: AcquisitionMetadata + ?Sized>(
    metadata: Option<&M>,
    manual: &ManualMetadata,
) -> Result<VoxelSize, MetadataError> {
    let x_pixel_um = resolve_float(manual.x_pixel_um, "x_pixel_um", || {
        metadata.map(|m| m.x_pixel_um())
    })?;
    let y_pixel_um = resolve_float(manual.y_pixel_um, "y_pixel_um", || {
        metadata.map(|m| m.y_pixel_um())
    })?;
    let z_pixel_um = resolve_float(manual.z_pixel_um, "z_pixel_um", || {
        metadata.map(|m| m.z_pixel_um())
    })?;

    let planes = manual
        .num_planes
        .map(|n| i64::try_from(n).map_err(|_| MetadataError::invalid("num_planes", "too large")))
        .transpose()?;
    let num_planes = match check_positive_int(planes, true).map_err(|e| e.for_field("num_planes"))? {
        // Non-negative after the check.
        Some(n) => n as u64,
        None => match metadata {
            Some(m) => m.num_planes()?,
            None => return Err(MetadataError::missing("num_planes", MANUAL_ORIGIN)),
        },
    };

    Ok(VoxelSize {
        x_pixel_um,
        y_pixel_um,
        z_pixel_um,
        num_planes,
    })
}

fn resolve_float(
    manual: Option<f64>,
    field: &str,
    from_file: impl FnOnce() -> Option<Result<f64, MetadataError>>,
) -> Result<f64, MetadataError> {
    match check_positive_float(manual, true).map_err(|e| e.for_field(field))? {
        Some(value) => Ok(value),
        None => from_file().unwrap_or_else(|| Err(MetadataError::missing(field, MANUAL_ORIGIN))),
    }
}

// =============================================================================
// Tests
// =============================================================================
