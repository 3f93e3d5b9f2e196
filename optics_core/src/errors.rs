//! # Error Types
//!
//! Structured error types for optics_core. These errors are designed to be
//! informative for both humans and machines, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use optics_core::errors::{OpticsError, OpticsResult};
//!
//! fn validate_axis(axis_deg: f64) -> OpticsResult<()> {
//!     if !(1.0..=180.0).contains(&axis_deg) {
//!         return Err(OpticsError::InvalidInput {
//!             field: "axis_deg".to_string(),
//!             value: axis_deg.to_string(),
//!             reason: "Axis must be between 1 and 180 degrees".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for optics_core operations
pub type OpticsResult<T> = Result<T, OpticsError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong. Malformed
/// numeric input is always reported through this type; the engine never
/// panics across the crate boundary and never coerces garbage to zero.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum OpticsError {
    /// An input value is invalid (non-finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Lens material not found in database
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Calculation failed (degenerate denominator, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl OpticsError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        OpticsError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        OpticsError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        OpticsError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        OpticsError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            OpticsError::InvalidInput { .. } => "INVALID_INPUT",
            OpticsError::MissingField { .. } => "MISSING_FIELD",
            OpticsError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            OpticsError::CalculationFailed { .. } => "CALCULATION_FAILED",
            OpticsError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Validate that a named numeric field is finite.
///
/// Shared guard used by every calculation input: NaN and infinite values
/// are input errors, never silently propagated into results.
pub fn require_finite(field: &str, value: f64) -> OpticsResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(OpticsError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ))
    }
}
