//! Measurement validation shared by all metadata formats.
//!
//! Every voxel size and plane count passes through one of two checks before
//! it is handed back to a caller:
//!
//! - [`check_positive_float`] for voxel sizes in micrometres
//! - [`check_positive_int`] for plane counts
//!
//! Both accept an optional value and a `none_allowed` flag. The metadata
//! accessors always pass `none_allowed = false`; manual metadata entry passes
//! `true` so unset values can fall back to a file.
//!
//! Zero is accepted. Only negative (and non-finite) values are rejected.

use thiserror::Error;

use crate::error::MetadataError;

// =============================================================================
// Validation Error
// =============================================================================

/// Reason a value failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value was absent and absence is not allowed
    #[error("None is an invalid value")]
    Missing,

    /// Value is below zero
    #[error("{value} is an invalid positive value")]
    Negative {
        /// The offending value
        value: String,
    },

    /// Value is NaN or infinite
    #[error("{value} is not a finite value")]
    NotFinite {
        /// The offending value
        value: f64,
    },

    /// Value should be a whole number but has a fractional part
    #[error("{value} is not a whole number")]
    NotIntegral {
        /// The offending value
        value: f64,
    },

    /// Text could not be read as a number
    #[error("'{value}' is not a number")]
    NotANumber {
        /// The offending text
        value: String,
    },
}

impl ValidationError {
    /// Attach the name of the measurement that failed.
    pub fn for_field(self, field: &str) -> MetadataError {
        MetadataError::invalid(field, self.to_string())
    }
}

// =============================================================================
// Checks
// =============================================================================

/// Check that a value is a non-negative, finite float.
///
/// # Returns
/// * `Ok(Some(value))` - the input, unchanged
/// * `Ok(None)` - input absent and `none_allowed` is set
/// * `Err(ValidationError)` - absent when not allowed, negative, or non-finite
pub fn check_positive_float(
    value: Option<f64>,
    none_allowed: bool,
) -> Result<Option<f64>, ValidationError> {
    let Some(value) = value else {
        return if none_allowed {
            Ok(None)
        } else {
            Err(ValidationError::Missing)
        };
    };

    if !value.is_finite() {
        return Err(ValidationError::NotFinite { value });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            value: value.to_string(),
        });
    }

    Ok(Some(value))
}

/// Check that a value is a non-negative integer.
///
/// Same contract as [`check_positive_float`], in the integer domain.
pub fn check_positive_int(
    value: Option<i64>,
    none_allowed: bool,
) -> Result<Option<i64>, ValidationError> {
    let Some(value) = value else {
        return if none_allowed {
            Ok(None)
        } else {
            Err(ValidationError::Missing)
        };
    };

    if value < 0 {
        return Err(ValidationError::Negative {
            value: value.to_string(),
        });
    }

    Ok(Some(value))
}

/// Convert a float that should hold a whole count into an integer.
///
/// Non-integral values are rejected rather than truncated.
pub fn integral_count(value: f64) -> Result<i64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { value });
    }
    if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
        return Err(ValidationError::NotIntegral { value });
    }
    Ok(value as i64)
}

/// Check a required voxel size, naming `field` in any error.
pub(crate) fn require_positive_float(value: Option<f64>, field: &str) -> Result<f64, MetadataError> {
    match check_positive_float(value, false) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(ValidationError::Missing.for_field(field)),
        Err(e) => Err(e.for_field(field)),
    }
}

/// Check a required plane count, naming `field` in any error.
pub(crate) fn require_positive_int(value: Option<i64>, field: &str) -> Result<u64, MetadataError> {
    match check_positive_int(value, false) {
        // Non-negative after the check.
        Ok(Some(value)) => Ok(value as u64),
        Ok(None) => Err(ValidationError::Missing.for_field(field)),
        Err(e) => Err(e.for_field(field)),
    }
}

// =============================================================================
// Command-line Parsers
// =============================================================================

/// Parse and check a non-negative float from text.
///
/// Suitable as a clap `value_parser`.
pub fn parse_positive_float(text: &str) -> Result<f64, ValidationError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            value: text.to_string(),
        })?;
    check_positive_float(Some(value), false)?.ok_or(ValidationError::Missing)
}

/// Parse and check a non-negative integer from text.
///
/// Suitable as a clap `value_parser`.
pub fn parse_positive_int(text: &str) -> Result<u64, ValidationError> {
    let value = text
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber {
            value: text.to_string(),
        })?;
    let value = check_positive_int(Some(value), false)?.ok_or(ValidationError::Missing)?;
    Ok(value as u64)
}

// =============================================================================
// Tests
// =============================================================================
