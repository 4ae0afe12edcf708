//! AcquisitionMetadata trait for format-agnostic measurement access.
//!
//! This module defines the `AcquisitionMetadata` trait, which provides a
//! unified interface for reading voxel sizes and plane counts regardless of
//! which acquisition platform wrote the metadata file.
//!
//! # Usage
//!
//! The trait is implemented by format-specific readers:
//! - [`crate::format::CellfinderMetadata`] for cellfinder `.ini` files
//! - [`crate::format::BakingTrayMetadata`] for BakingTray recipe `.yml` files
//! - [`crate::format::MesoSpimMetadata`] for mesoSPIM `.txt` files
//!
//! and by the closed [`crate::metadata::Metadata`] union over all three.

use serde::Serialize;

use crate::error::MetadataError;

// =============================================================================
// Voxel Size
// =============================================================================

/// Snapshot of all four measurements of an acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoxelSize {
    /// Voxel size along X in micrometres
    pub x_pixel_um: f64,

    /// Voxel size along Y in micrometres
    pub y_pixel_um: f64,

    /// Voxel size along Z (plane spacing) in micrometres
    pub z_pixel_um: f64,

    /// Total number of imaging planes
    pub num_planes: u64,
}

// =============================================================================
// AcquisitionMetadata Trait
// =============================================================================

/// Format-agnostic interface to acquisition metadata.
///
/// Each accessor is computed from the parsed document on every call and
/// validated before it is returned: sizes are finite and non-negative, plane
/// counts are non-negative. There is no partial result; an accessor either
/// returns a valid value or an error.
pub trait AcquisitionMetadata {
    /// Voxel size along X in micrometres.
    fn x_pixel_um(&self) -> Result<f64, MetadataError>;

    /// Voxel size along Y in micrometres.
    fn y_pixel_um(&self) -> Result<f64, MetadataError>;

    /// Voxel size along Z in micrometres.
    fn z_pixel_um(&self) -> Result<f64, MetadataError>;

    /// Total number of imaging planes.
    fn num_planes(&self) -> Result<u64, MetadataError>;

    /// Read all four measurements at once.
    ///
    /// Fails on the first accessor that fails.
    fn voxel_size(&self) -> Result<VoxelSize, MetadataError> {
        Ok(VoxelSize {
            x_pixel_um: self.x_pixel_um()?,
            y_pixel_um: self.y_pixel_um()?,
            z_pixel_um: self.z_pixel_um()?,
            num_planes: self.num_planes()?,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
