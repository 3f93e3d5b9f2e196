//! # Lens Thickness Estimate
//!
//! Estimates edge and center thickness for a finished lens from the
//! prescription sphere, the frame geometry, and the material.
//!
//! ## Algorithm
//!
//! 1. decentration = |frame PD - patient PD| / 2
//! 2. effective diameter = eye size + edge safety margin + 2 × decentration
//! 3. radius of curvature R = (n - 1) / (|sphere| / 1000), in mm
//! 4. sag = R - sqrt(R² - h²) for h = effective diameter / 2; when R <= h
//!    the radicand would go negative, so the paraxial approximation
//!    h² / (2R) is used instead
//! 5. minus lens: center is fixed at the material minimum, edge = center + sag;
//!    plus lens: edge is fixed at the safety minimum, center = edge + sag
//!
//! The thickest-point asymmetry in step 5 is the physically meaningful part
//! of the estimate: a minus lens is thickest at the edge, a plus lens at
//! the center. The result reports which branch was taken so callers can
//! present the thickest point correctly.

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, OpticsError, OpticsResult};
use crate::materials::LensMaterial;

/// Manufacturing/edge-safety margin added to the frame eye size when
/// computing the effective (minimum blank) diameter, in mm.
pub const EDGE_SAFETY_MARGIN_MM: f64 = 2.0;

/// Fixed edge thickness for plus (convex) lenses, in mm.
pub const PLUS_LENS_MIN_EDGE_MM: f64 = 1.5;

/// Input parameters for a lens thickness estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sphere_d": -5.0,
///   "frame_eye_size_mm": 52.0,
///   "frame_pd_mm": 70.0,
///   "patient_pd_mm": 62.0,
///   "material": "CR-39"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensThicknessInput {
    /// Prescription sphere (diopters, signed)
    pub sphere_d: f64,

    /// Frame eye size / lens width (mm)
    pub frame_eye_size_mm: f64,

    /// Frame geometric center distance, "frame PD" (mm)
    pub frame_pd_mm: f64,

    /// Patient interpupillary distance (mm)
    pub patient_pd_mm: f64,

    /// Lens material
    pub material: LensMaterial,
}

impl LensThicknessInput {
    /// Validate input parameters.
    pub fn validate(&self) -> OpticsResult<()> {
        require_finite("sphere_d", self.sphere_d)?;
        require_finite("frame_eye_size_mm", self.frame_eye_size_mm)?;
        require_finite("frame_pd_mm", self.frame_pd_mm)?;
        require_finite("patient_pd_mm", self.patient_pd_mm)?;
        if self.frame_eye_size_mm <= 0.0 {
            return Err(OpticsError::invalid_input(
                "frame_eye_size_mm",
                self.frame_eye_size_mm.to_string(),
                "Eye size must be positive",
            ));
        }
        if self.frame_pd_mm <= 0.0 {
            return Err(OpticsError::invalid_input(
                "frame_pd_mm",
                self.frame_pd_mm.to_string(),
                "Frame PD must be positive",
            ));
        }
        if self.patient_pd_mm <= 0.0 {
            return Err(OpticsError::invalid_input(
                "patient_pd_mm",
                self.patient_pd_mm.to_string(),
                "Patient PD must be positive",
            ));
        }
        Ok(())
    }

    /// Per-lens decentration from frame geometry (mm)
    pub fn decentration_mm(&self) -> f64 {
        (self.frame_pd_mm - self.patient_pd_mm).abs() / 2.0
    }

    /// Effective (minimum blank) diameter (mm)
    pub fn effective_diameter_mm(&self) -> f64 {
        self.frame_eye_size_mm + EDGE_SAFETY_MARGIN_MM + 2.0 * self.decentration_mm()
    }
}

/// Results from a lens thickness estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "edge_thickness_mm": 6.1,
///   "center_thickness_mm": 2.0,
///   "is_minus_lens": true,
///   "decentration_mm": 4.0,
///   "effective_diameter_mm": 62.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensThicknessResult {
    /// Estimated edge thickness (mm)
    pub edge_thickness_mm: f64,

    /// Estimated center thickness (mm)
    pub center_thickness_mm: f64,

    /// True for a minus (concave) lens - thickest at the edge
    pub is_minus_lens: bool,

    /// Per-lens decentration (mm)
    pub decentration_mm: f64,

    /// Effective diameter used for the sag (mm)
    pub effective_diameter_mm: f64,

    /// Surface sag across the effective diameter (mm)
    pub sag_mm: f64,
}

impl LensThicknessResult {
    /// Thickness at the thickest point (edge for minus, center for plus)
    pub fn max_thickness_mm(&self) -> f64 {
        if self.is_minus_lens {
            self.edge_thickness_mm
        } else {
            self.center_thickness_mm
        }
    }
}

/// Sagitta of a spherical surface of radius `r_mm` across half-chord `h_mm`.
///
/// Uses the exact spherometer formula while the radicand is positive and
/// falls back to the paraxial approximation at the R <= h crossover.
fn sag_mm(r_mm: f64, h_mm: f64) -> f64 {
    if r_mm > h_mm {
        r_mm - (r_mm * r_mm - h_mm * h_mm).sqrt()
    } else {
        (h_mm * h_mm) / (2.0 * r_mm)
    }
}

/// Estimate lens thickness.
pub fn calculate(input: &LensThicknessInput) -> OpticsResult<LensThicknessResult> {
    input.validate()?;

    let props = input.material.properties();
    let decentration = input.decentration_mm();
    let effective_diameter = input.effective_diameter_mm();
    let half_diameter = effective_diameter / 2.0;

    // Plano carries no curvature; sag is zero and both surfaces sit at
    // their minimums.
    let sag = if input.sphere_d == 0.0 {
        0.0
    } else {
        let radius_mm = (props.refractive_index - 1.0) / (input.sphere_d.abs() / 1000.0);
        sag_mm(radius_mm, half_diameter)
    };

    let is_minus_lens = input.sphere_d < 0.0;
    let (edge_thickness_mm, center_thickness_mm) = if is_minus_lens {
        let center = props.min_center_thickness_mm;
        (center + sag, center)
    } else {
        let edge = PLUS_LENS_MIN_EDGE_MM;
        (edge, edge + sag)
    };

    Ok(LensThicknessResult {
        edge_thickness_mm,
        center_thickness_mm,
        is_minus_lens,
        decentration_mm: decentration,
        effective_diameter_mm: effective_diameter,
        sag_mm: sag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> LensThicknessInput {
        LensThicknessInput {
            sphere_d: -5.00,
            frame_eye_size_mm: 52.0,
            frame_pd_mm: 70.0,
            patient_pd_mm: 62.0,
            material: LensMaterial::Cr39,
        }
    }

    #[test]
    fn test_decentration_and_diameter() {
        let input = test_input();
        assert_eq!(input.decentration_mm(), 4.0);
        // 52 + 2 + 2*4 = 62
        assert_eq!(input.effective_diameter_mm(), 62.0);
    }

    #[test]
    fn test_minus_lens_thickest_at_edge() {
        let input = test_input();
        let result = calculate(&input).unwrap();
        assert!(result.is_minus_lens);
        assert_eq!(result.center_thickness_mm, 2.0); // CR-39 minimum
        assert!(result.edge_thickness_mm > result.center_thickness_mm);
        assert_eq!(result.max_thickness_mm(), result.edge_thickness_mm);
    }

    #[test]
    fn test_minus_lens_sag_value() {
        let input = test_input();
        let result = calculate(&input).unwrap();
        // R = (1.498 - 1) / (5 / 1000) = 99.6 mm, h = 31 mm
        // sag = 99.6 - sqrt(99.6^2 - 31^2) = 4.95 mm
        assert!((result.sag_mm - 4.95).abs() < 0.01);
        assert!((result.edge_thickness_mm - 6.95).abs() < 0.01);
    }

    #[test]
    fn test_plus_lens_thickest_at_center() {
        let input = LensThicknessInput {
            sphere_d: 4.00,
            ..test_input()
        };
        let result = calculate(&input).unwrap();
        assert!(!result.is_minus_lens);
        assert_eq!(result.edge_thickness_mm, PLUS_LENS_MIN_EDGE_MM);
        assert!(result.center_thickness_mm > result.edge_thickness_mm);
        assert_eq!(result.max_thickness_mm(), result.center_thickness_mm);
    }

    #[test]
    fn test_paraxial_fallback() {
        // Strong power in a low-index material drives R below the
        // half-diameter; the estimate must not produce NaN
        let input = LensThicknessInput {
            sphere_d: -20.00,
            ..test_input()
        };
        let result = calculate(&input).unwrap();
        // R = 0.498 / 0.020 = 24.9 mm < h = 31 mm -> paraxial h^2 / (2R)
        let expected = 31.0_f64 * 31.0 / (2.0 * 24.9);
        assert!((result.sag_mm - expected).abs() < 0.01);
        assert!(result.sag_mm.is_finite());
    }

    #[test]
    fn test_plano_lens() {
        let input = LensThicknessInput {
            sphere_d: 0.0,
            ..test_input()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.sag_mm, 0.0);
        assert!(!result.is_minus_lens);
        assert_eq!(result.edge_thickness_mm, PLUS_LENS_MIN_EDGE_MM);
        assert_eq!(result.center_thickness_mm, PLUS_LENS_MIN_EDGE_MM);
    }

    #[test]
    fn test_high_index_is_thinner() {
        let cr39 = calculate(&test_input()).unwrap();
        let hi = calculate(&LensThicknessInput {
            material: LensMaterial::HighIndex174,
            ..test_input()
        })
        .unwrap();
        assert!(hi.sag_mm < cr39.sag_mm);
    }

    #[test]
    fn test_no_decentration() {
        let input = LensThicknessInput {
            frame_pd_mm: 62.0,
            patient_pd_mm: 62.0,
            ..test_input()
        };
        assert_eq!(input.decentration_mm(), 0.0);
        // 52 + 2 + 0
        assert_eq!(input.effective_diameter_mm(), 54.0);
    }

    #[test]
    fn test_invalid_input() {
        let input = LensThicknessInput {
            sphere_d: f64::NAN,
            ..test_input()
        };
        assert!(calculate(&input).is_err());

        let bad_frame = LensThicknessInput {
            frame_eye_size_mm: 0.0,
            ..test_input()
        };
        assert!(calculate(&bad_frame).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"CR-39\""));
        let roundtrip: LensThicknessInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
