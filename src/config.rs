//! Command-line configuration for the `micrometa` binary.
//!
//! Options can be given as flags or as environment variables with the
//! `MICROMETA_` prefix:
//!
//! - `MICROMETA_X_PIXEL_UM`, `MICROMETA_Y_PIXEL_UM`, `MICROMETA_Z_PIXEL_UM`
//! - `MICROMETA_NUM_PLANES`
//! - `MICROMETA_OUTPUT` (`text` or `json`)
//!
//! # Example
//!
//! ```text
//! micrometa tests/data/metadata/mesoSPIM.raw_meta.txt --output json
//! micrometa --x-pixel-um 2 --y-pixel-um 2 --z-pixel-um 5 --num-planes 1500
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::format::validation::{parse_positive_float, parse_positive_int};
use crate::metadata::ManualMetadata;

/// How results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `name: value` line per measurement
    #[default]
    Text,

    /// A single JSON object
    Json,
}

/// micrometa - read voxel sizes and plane counts from acquisition metadata.
///
/// Supports cellfinder (`*cellfinder_meta*.ini`), BakingTray
/// (`*recipe*.yml`) and mesoSPIM (`*raw_meta*.txt`) metadata files. Any
/// measurement can also be entered manually, overriding the file.
#[derive(Parser, Debug, Clone)]
#[command(name = "micrometa")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Metadata file to read.
    pub metadata: Option<PathBuf>,

    // =========================================================================
    // Manual Metadata
    // =========================================================================
    /// Voxel size along X in micrometres.
    #[arg(long, env = "MICROMETA_X_PIXEL_UM", value_parser = parse_positive_float)]
    pub x_pixel_um: Option<f64>,

    /// Voxel size along Y in micrometres.
    #[arg(long, env = "MICROMETA_Y_PIXEL_UM", value_parser = parse_positive_float)]
    pub y_pixel_um: Option<f64>,

    /// Voxel size along Z in micrometres.
    #[arg(long, env = "MICROMETA_Z_PIXEL_UM", value_parser = parse_positive_float)]
    pub z_pixel_um: Option<f64>,

    /// Total number of imaging planes.
    #[arg(long, env = "MICROMETA_NUM_PLANES", value_parser = parse_positive_int)]
    pub num_planes: Option<u64>,

    // =========================================================================
    // Output
    // =========================================================================
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "MICROMETA_OUTPUT")]
    pub output: OutputFormat,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.is_none() && !self.manual().is_complete() {
            return Err(
                "No metadata file given. Supply a metadata file, or enter all of \
                 --x-pixel-um, --y-pixel-um, --z-pixel-um and --num-planes"
                    .to_string(),
            );
        }
        Ok(())
    }

    /// Manually entered measurements.
    pub fn manual(&self) -> ManualMetadata {
        ManualMetadata {
            x_pixel_um: self.x_pixel_um,
            y_pixel_um: self.y_pixel_um,
            z_pixel_um: self.z_pixel_um,
            num_planes: self.num_planes,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
