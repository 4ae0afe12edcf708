//! Readers for microscope acquisition metadata files.
//!
//! # Format Detection
//!
//! Use [`detect::classify`] to identify the format of a metadata file from
//! its name. Currently supported formats:
//!
//! - **cellfinder**: `*cellfinder_meta*.ini`
//! - **BakingTray**: `*recipe*.yml`
//! - **mesoSPIM**: `*raw_meta*.txt`
//!
//! Each format has a reader implementing
//! [`AcquisitionMetadata`](crate::metadata::AcquisitionMetadata). All
//! readers share the checks in [`validation`].

pub mod baking_tray;
pub mod cellfinder;
pub mod detect;
pub mod mesospim;
pub mod parse;
pub mod validation;

pub use baking_tray::{BakingTrayMetadata, UM_PER_MM};
pub use cellfinder::CellfinderMetadata;
pub use detect::{
    classify, FormatKind, MetadataSource, DETECTION_ORDER, SUPPORTED_METADATA_TYPES,
};
pub use mesospim::{MesoSpimMetadata, PIXEL_SIZE_MARKER, Z_PLANES_MARKER, Z_STEP_MARKER};
pub use validation::{
    check_positive_float, check_positive_int, integral_count, parse_positive_float,
    parse_positive_int, ValidationError,
};
