//! # Vertex Distance Compensation
//!
//! When a lens moves closer to or farther from the eye, its effective power
//! changes; the prescription must be compensated to keep the correction at
//! the new vertex distance.
//!
//! ## Formula
//!
//! Fc = F / (1 - d * F), where d is the vertex change in meters
//! (old - new) and F is the power in diopters.
//!
//! The formula is its own inverse under a vertex swap: compensating from
//! d1 to d2 and then from d2 back to d1 returns the original power exactly.
//! Spectacle-to-contact (new vertex 0) and contact-to-spectacle are the
//! same operation with old/new exchanged.
//!
//! ## Example
//!
//! ```rust
//! use optics_core::calculations::vertex::{calculate, VertexCompensationInput};
//!
//! // -8.00 D spectacle lens at 12 mm, refit as a contact lens
//! let input = VertexCompensationInput {
//!     power_d: -8.00,
//!     old_vertex_mm: 12.0,
//!     new_vertex_mm: 0.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.compensated_power_d - (-7.30)).abs() < 0.005);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, OpticsError, OpticsResult};

/// Input parameters for vertex distance compensation.
///
/// ## JSON Example
///
/// ```json
/// { "power_d": -8.0, "old_vertex_mm": 12.0, "new_vertex_mm": 0.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexCompensationInput {
    /// Lens power at the old vertex distance (diopters)
    pub power_d: f64,

    /// Old vertex distance (mm)
    pub old_vertex_mm: f64,

    /// New vertex distance (mm); 0 for a contact lens
    pub new_vertex_mm: f64,
}

impl VertexCompensationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> OpticsResult<()> {
        require_finite("power_d", self.power_d)?;
        require_finite("old_vertex_mm", self.old_vertex_mm)?;
        require_finite("new_vertex_mm", self.new_vertex_mm)?;
        if self.old_vertex_mm < 0.0 {
            return Err(OpticsError::invalid_input(
                "old_vertex_mm",
                self.old_vertex_mm.to_string(),
                "Vertex distance cannot be negative",
            ));
        }
        if self.new_vertex_mm < 0.0 {
            return Err(OpticsError::invalid_input(
                "new_vertex_mm",
                self.new_vertex_mm.to_string(),
                "Vertex distance cannot be negative",
            ));
        }
        Ok(())
    }

    /// Vertex change in meters, signed (positive when the lens moves closer)
    pub fn vertex_change_m(&self) -> f64 {
        (self.old_vertex_mm - self.new_vertex_mm) / 1000.0
    }
}

/// Results from vertex distance compensation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexCompensationResult {
    /// Power required at the new vertex distance (diopters)
    pub compensated_power_d: f64,

    /// Original power at the old vertex distance (diopters)
    pub original_power_d: f64,

    /// Vertex change (mm), positive when the lens moved closer to the eye
    pub vertex_change_mm: f64,
}

/// Compensate a lens power for a change in vertex distance.
///
/// Numerically stable as power approaches zero (plano passes through).
///
/// # Returns
///
/// * `Ok(VertexCompensationResult)` - Compensated power
/// * `Err(OpticsError)` - Invalid input, or a degenerate 1 - d*F = 0 denominator
pub fn calculate(input: &VertexCompensationInput) -> OpticsResult<VertexCompensationResult> {
    input.validate()?;

    let d_m = input.vertex_change_m();
    let denominator = 1.0 - d_m * input.power_d;
    if denominator == 0.0 {
        return Err(OpticsError::calculation_failed(
            "VertexCompensation",
            "Vertex change places the focal point at the lens plane (1 - d*F = 0)",
        ));
    }

    Ok(VertexCompensationResult {
        compensated_power_d: input.power_d / denominator,
        original_power_d: input.power_d,
        vertex_change_mm: input.old_vertex_mm - input.new_vertex_mm,
    })
}
