//! # micrometa
//!
//! Read microscope acquisition metadata and expose a uniform set of physical
//! measurements, whatever platform wrote the file.
//!
//! ## Features
//!
//! - **Format detection**: picks the format from the file name and extension
//! - **Format support**: cellfinder INI, BakingTray YAML recipes and mesoSPIM
//!   text metadata
//! - **Uniform measurements**: X/Y/Z voxel size in micrometres and the total
//!   number of planes, validated on every access
//! - **Manual entry**: any measurement can be supplied by hand instead
//!
//! ## Architecture
//!
//! - [`mod@format`] - format detection, per-format readers, parsers and validation
//! - [`metadata`] - the format-agnostic interface and entry point
//! - [`config`] - CLI configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use micrometa::{get_acquisition_metadata, AcquisitionMetadata};
//!
//! let metadata = get_acquisition_metadata("brain/BakingTray_recipe.yml")?;
//!
//! println!("format: {}", metadata.format().name());
//! println!("x: {} um", metadata.x_pixel_um()?);
//! println!("y: {} um", metadata.y_pixel_um()?);
//! println!("z: {} um", metadata.z_pixel_um()?);
//! println!("planes: {}", metadata.num_planes()?);
//! # Ok::<(), micrometa::MetadataError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod metadata;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use error::{MetadataError, ParseError};
pub use format::parse::{
    get_text_line, get_text_line_range, get_text_lines, natural_cmp, natural_sort, IniDocument,
    TextLineOptions, YamlDocument,
};
pub use format::{
    check_positive_float, check_positive_int, classify, parse_positive_float, parse_positive_int,
    BakingTrayMetadata, CellfinderMetadata, FormatKind, MesoSpimMetadata, MetadataSource,
    ValidationError, SUPPORTED_METADATA_TYPES,
};
pub use metadata::{
    get_acquisition_metadata, resolve_voxel_size, AcquisitionMetadata, ManualMetadata, Metadata,
    VoxelSize,
};
