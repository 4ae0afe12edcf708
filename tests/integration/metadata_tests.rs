//! Metadata detection and extraction tests.
//!
//! Tests verify:
//! - Each fixture is classified correctly
//! - All four measurements match the known acquisition settings
//! - Unsupported files are rejected with a helpful message
//! - Malformed files surface parser errors unchanged

use micrometa::format::parse::YamlDocument;
use micrometa::{
    get_acquisition_metadata, AcquisitionMetadata, FormatKind, Metadata, MetadataError,
    ParseError,
};

use super::test_utils::{
    assert_close, baking_tray_metadata, cellfinder_metadata, mesospim_metadata, temp_metadata,
    unsupported_metadata,
};

// =============================================================================
// Fixture Tests
// =============================================================================

#[test]
fn test_cellfinder_meta() {
    let metadata = get_acquisition_metadata(cellfinder_metadata()).unwrap();

    assert_eq!(metadata.format(), FormatKind::Cellfinder);
    assert_close(2.0, metadata.x_pixel_um().unwrap());
    assert_close(2.0, metadata.y_pixel_um().unwrap());
    assert_close(5.0, metadata.z_pixel_um().unwrap());
    assert_eq!(metadata.num_planes().unwrap(), 1500);
}

#[test]
fn test_baking_tray_meta() {
    let metadata = get_acquisition_metadata(baking_tray_metadata()).unwrap();

    assert_eq!(metadata.format(), FormatKind::BakingTray);
    assert_close(2.19, metadata.x_pixel_um().unwrap());
    assert_close(2.14, metadata.y_pixel_um().unwrap());
    assert_close(5.0, metadata.z_pixel_um().unwrap());
    assert_eq!(metadata.num_planes().unwrap(), 2000);
}

#[test]
fn test_mesospim_meta() {
    let metadata = get_acquisition_metadata(mesospim_metadata()).unwrap();

    assert_eq!(metadata.format(), FormatKind::MesoSpim);
    assert_close(8.23, metadata.x_pixel_um().unwrap());
    assert_close(8.23, metadata.y_pixel_um().unwrap());
    assert_close(10.0, metadata.z_pixel_um().unwrap());
    assert_eq!(metadata.num_planes().unwrap(), 852);
}

#[test]
fn test_unsupported_meta() {
    let err = get_acquisition_metadata(unsupported_metadata()).unwrap_err();

    assert!(matches!(err, MetadataError::UnsupportedFormat { .. }));
    let message = err.to_string();
    assert!(message.contains("unsupported_metadata.txt"));
    assert!(message.contains("Cellfinder"));
    assert!(message.contains("BakingTray"));
    assert!(message.contains("mesoSPIM"));
}

// =============================================================================
// Derived Value Tests
// =============================================================================

#[test]
fn test_baking_tray_z_formula() {
    let path = baking_tray_metadata();
    let metadata = get_acquisition_metadata(&path).unwrap();

    let recipe = YamlDocument::read(&path).unwrap();
    let slice_thickness = recipe
        .get_float(&["mosaic", "sliceThickness"])
        .unwrap()
        .unwrap();
    let num_optical_planes = recipe
        .get_float(&["mosaic", "numOpticalPlanes"])
        .unwrap()
        .unwrap();

    assert_eq!(
        metadata.z_pixel_um().unwrap(),
        1000.0 * slice_thickness / num_optical_planes
    );
}

#[test]
fn test_mesospim_xy_are_identical() {
    let metadata = get_acquisition_metadata(mesospim_metadata()).unwrap();
    assert_eq!(
        metadata.x_pixel_um().unwrap(),
        metadata.y_pixel_um().unwrap()
    );
}

#[test]
fn test_voxel_size_summary() {
    let metadata = get_acquisition_metadata(cellfinder_metadata()).unwrap();
    let size = metadata.voxel_size().unwrap();

    assert_eq!(size.x_pixel_um, metadata.x_pixel_um().unwrap());
    assert_eq!(size.num_planes, 1500);
}

#[test]
fn test_metadata_reports_path() {
    let path = mesospim_metadata();
    let metadata = get_acquisition_metadata(&path).unwrap();
    assert_eq!(metadata.path(), path.as_path());
    assert!(matches!(metadata, Metadata::MesoSpim(_)));
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_malformed_ini_is_parse_error() {
    let (_dir, path) = temp_metadata("cellfinder_metadata.ini", "x = 2\n");
    let err = get_acquisition_metadata(&path).unwrap_err();
    assert!(matches!(err, MetadataError::Parse(ParseError::Ini { .. })));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let (_dir, path) = temp_metadata("recipe.yml", "mosaic: [unclosed\n");
    let err = get_acquisition_metadata(&path).unwrap_err();
    assert!(matches!(err, MetadataError::Parse(ParseError::Yaml { .. })));
}

#[test]
fn test_missing_marker_is_missing_field() {
    let (_dir, path) = temp_metadata("stack.raw_meta.txt", "[Pixelsize in um] 4\n");
    let metadata = get_acquisition_metadata(&path).unwrap();

    assert_eq!(metadata.x_pixel_um().unwrap(), 4.0);
    assert!(matches!(
        metadata.num_planes(),
        Err(MetadataError::MissingField { .. })
    ));
}

#[test]
fn test_zero_optical_planes_is_invalid() {
    let (_dir, path) = temp_metadata(
        "recipe.yml",
        "mosaic:\n  sliceThickness: 0.05\n  numOpticalPlanes: 0\n  numSections: 10\n",
    );
    let metadata = get_acquisition_metadata(&path).unwrap();

    assert!(matches!(
        metadata.z_pixel_um(),
        Err(MetadataError::InvalidMeasurement { .. })
    ));
}

#[test]
fn test_negative_voxel_size_is_invalid() {
    let (_dir, path) = temp_metadata(
        "cellfinder_metadata.ini",
        "[voxels]\nx = -2\ny = 2\nz = 5\n[planes]\nnum_planes = 10\n",
    );
    let metadata = get_acquisition_metadata(&path).unwrap();

    assert!(matches!(
        metadata.x_pixel_um(),
        Err(MetadataError::InvalidMeasurement { .. })
    ));
    assert_eq!(metadata.y_pixel_um().unwrap(), 2.0);
    assert!(metadata.voxel_size().is_err());
}
