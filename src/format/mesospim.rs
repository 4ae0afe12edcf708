//! mesoSPIM metadata reader.
//!
//! mesoSPIM light-sheet microscopes write a `*_meta.txt` file per stack
//! with one `[Marker] value` entry per line, e.g.:
//!
//! ```text
//! [Pixelsize in um] 8.23
//! [z_stepsize] 10
//! [z_planes] 852
//! ```
//!
//! The value is the last whitespace-separated token of the first line that
//! starts with the marker. The format stores a single isotropic XY pixel
//! size, so `x_pixel_um` and `y_pixel_um` read the same line.

use std::path::{Path, PathBuf};

use crate::error::{MetadataError, ParseError};
use crate::metadata::AcquisitionMetadata;

use super::parse::{get_text_lines, TextLineOptions};
use super::validation::{require_positive_float, require_positive_int, ValidationError};

/// Line marker for the XY pixel size.
pub const PIXEL_SIZE_MARKER: &str = "[Pixelsize in um]";

/// Line marker for the Z step size.
pub const Z_STEP_MARKER: &str = "[z_stepsize]";

/// Line marker for the number of planes.
pub const Z_PLANES_MARKER: &str = "[z_planes]";

/// Reader for mesoSPIM metadata files.
#[derive(Debug, Clone)]
pub struct MesoSpimMetadata {
    path: PathBuf,
    lines: Vec<String>,
    origin: String,
}

impl MesoSpimMetadata {
    /// Open and read a mesoSPIM metadata file.
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        let lines = get_text_lines(path, &TextLineOptions::default())?;
        Ok(Self::from_lines(path, lines))
    }

    /// Wrap already-read lines.
    ///
    /// Lines are expected to be trimmed with empty lines removed.
    pub fn from_lines(path: &Path, lines: Vec<String>) -> Self {
        let origin = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        MesoSpimMetadata {
            path: path.to_path_buf(),
            lines,
            origin,
        }
    }

    /// Path of the metadata file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The metadata lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Last whitespace-separated token of the first line starting with `marker`.
    ///
    /// The whole line is split, so a line holding only the marker, or a value
    /// glued to the marker, yields a token that fails number parsing.
    fn value_token(&self, marker: &str) -> Result<&str, MetadataError> {
        self.lines
            .iter()
            .find(|line| line.starts_with(marker))
            .and_then(|line| line.split_whitespace().last())
            .ok_or_else(|| MetadataError::missing(marker, &self.origin))
    }

    fn float_value(&self, marker: &str, field: &str) -> Result<f64, MetadataError> {
        let token = self.value_token(marker)?;
        let value = token.parse::<f64>().map_err(|_| {
            ValidationError::NotANumber {
                value: token.to_string(),
            }
            .for_field(field)
        })?;
        require_positive_float(Some(value), field)
    }
}

impl AcquisitionMetadata for MesoSpimMetadata {
    fn x_pixel_um(&self) -> Result<f64, MetadataError> {
        self.float_value(PIXEL_SIZE_MARKER, "x_pixel_um")
    }

    fn y_pixel_um(&self) -> Result<f64, MetadataError> {
        self.float_value(PIXEL_SIZE_MARKER, "y_pixel_um")
    }

    fn z_pixel_um(&self) -> Result<f64, MetadataError> {
        self.float_value(Z_STEP_MARKER, "z_pixel_um")
    }

    fn num_planes(&self) -> Result<u64, MetadataError> {
        let token = self.value_token(Z_PLANES_MARKER)?;
        let value = token.parse::<i64>().map_err(|_| {
            ValidationError::NotANumber {
                value: token.to_string(),
            }
            .for_field("num_planes")
        })?;
        require_positive_int(Some(value), "num_planes")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse::split_lines;

    fn reader(text: &str) -> MesoSpimMetadata {
        let lines = split_lines(text, &TextLineOptions::default());
        MesoSpimMetadata::from_lines(Path::new("stack.raw_meta.txt"), lines)
    }

    const META: &str = "\
[METADATA]
[Laser] 488 nm
[Pixelsize in um] 8.23
[z_start] 0
[z_stepsize] 10
[z_planes] 852
";

    #[test]
    fn test_reads_all_measurements() {
        let meta = reader(META);
        assert_eq!(meta.x_pixel_um().unwrap(), 8.23);
        assert_eq!(meta.y_pixel_um().unwrap(), 8.23);
        assert_eq!(meta.z_pixel_um().unwrap(), 10.0);
        assert_eq!(meta.num_planes().unwrap(), 852);
    }

    #[test]
    fn test_first_matching_line_wins() {
        let meta = reader("[z_planes] 10\n[z_planes] 20\n");
        assert_eq!(meta.num_planes().unwrap(), 10);
    }

    #[test]
    fn test_missing_marker() {
        let meta = reader("[Pixelsize in um] 8.23\n");
        match meta.z_pixel_um() {
            Err(MetadataError::MissingField { field, origin }) => {
                assert_eq!(field, Z_STEP_MARKER);
                assert_eq!(origin, "stack.raw_meta.txt");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_marker_without_value() {
        let meta = reader("[z_stepsize]\n");
        assert!(matches!(
            meta.z_pixel_um(),
            Err(MetadataError::InvalidMeasurement { .. })
        ));
    }

    #[test]
    fn test_value_glued_to_marker() {
        let meta = reader("[z_planes]852\n[z_stepsize]10\n");
        match meta.num_planes() {
            Err(MetadataError::InvalidMeasurement { field, message }) => {
                assert_eq!(field, "num_planes");
                assert_eq!(message, "'[z_planes]852' is not a number");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            meta.z_pixel_um(),
            Err(MetadataError::InvalidMeasurement { .. })
        ));
    }

    #[test]
    fn test_non_numeric_value() {
        let meta = reader("[z_planes] many\n[z_stepsize] 2.5\n");
        assert!(matches!(
            meta.num_planes(),
            Err(MetadataError::InvalidMeasurement { .. })
        ));
        // Integer count is not read from a float token
        let meta = reader("[z_planes] 852.0\n");
        assert!(meta.num_planes().is_err());
    }

    #[test]
    fn test_negative_value() {
        let meta = reader("[z_stepsize] -10\n");
        assert!(matches!(
            meta.z_pixel_um(),
            Err(MetadataError::InvalidMeasurement { .. })
        ));
    }
}
