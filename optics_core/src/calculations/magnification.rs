//! # Spectacle Magnification
//!
//! Percent change in retinal image size introduced by a spectacle lens,
//! split into the classic power and shape factors:
//!
//! - power factor = 1 / (1 - d·F), d = vertex distance in meters
//! - shape factor = 1 / (1 - (t/n)·F1), t = center thickness in meters,
//!   n = refractive index, F1 = front base curve in diopters
//!
//! The shape inputs are optional: when thickness, index, and base curve are
//! not all supplied (or thickness is zero), the shape factor is exactly 1
//! and the power factor alone drives the result. Optional inputs degrade
//! gracefully rather than blocking the primary calculation.
//!
//! ## Example
//!
//! ```rust
//! use optics_core::calculations::magnification::{calculate, SpectacleMagnificationInput};
//!
//! let input = SpectacleMagnificationInput {
//!     power_d: -5.00,
//!     vertex_distance_mm: 12.0,
//!     center_thickness_mm: None,
//!     refractive_index: None,
//!     base_curve_d: None,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.shape_factor, 1.0);
//! assert!(result.is_minification);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, OpticsError, OpticsResult};

/// Input parameters for spectacle magnification.
///
/// ## JSON Example
///
/// ```json
/// {
///   "power_d": -5.0,
///   "vertex_distance_mm": 12.0,
///   "center_thickness_mm": 2.2,
///   "refractive_index": 1.498,
///   "base_curve_d": 4.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectacleMagnificationInput {
    /// Back vertex power (diopters)
    pub power_d: f64,

    /// Vertex distance (mm)
    pub vertex_distance_mm: f64,

    /// Center thickness (mm); shape factor input, optional
    pub center_thickness_mm: Option<f64>,

    /// Material refractive index; shape factor input, optional
    pub refractive_index: Option<f64>,

    /// Front base curve (diopters); shape factor input, optional
    pub base_curve_d: Option<f64>,
}

impl SpectacleMagnificationInput {
    /// Validate input parameters.
    ///
    /// The required fields must be finite; the optional shape inputs are
    /// checked only when present.
    pub fn validate(&self) -> OpticsResult<()> {
        require_finite("power_d", self.power_d)?;
        require_finite("vertex_distance_mm", self.vertex_distance_mm)?;
        if self.vertex_distance_mm < 0.0 {
            return Err(OpticsError::invalid_input(
                "vertex_distance_mm",
                self.vertex_distance_mm.to_string(),
                "Vertex distance cannot be negative",
            ));
        }
        if let Some(t) = self.center_thickness_mm {
            require_finite("center_thickness_mm", t)?;
            if t < 0.0 {
                return Err(OpticsError::invalid_input(
                    "center_thickness_mm",
                    t.to_string(),
                    "Thickness cannot be negative",
                ));
            }
        }
        if let Some(n) = self.refractive_index {
            require_finite("refractive_index", n)?;
            if n <= 1.0 {
                return Err(OpticsError::invalid_input(
                    "refractive_index",
                    n.to_string(),
                    "Refractive index must exceed 1.0",
                ));
            }
        }
        if let Some(f1) = self.base_curve_d {
            require_finite("base_curve_d", f1)?;
        }
        Ok(())
    }

    /// Shape inputs when fully supplied and meaningful: (t meters, n, F1)
    fn shape_inputs(&self) -> Option<(f64, f64, f64)> {
        match (self.center_thickness_mm, self.refractive_index, self.base_curve_d) {
            (Some(t), Some(n), Some(f1)) if t > 0.0 => Some((t / 1000.0, n, f1)),
            _ => None,
        }
    }
}

/// Results from spectacle magnification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectacleMagnificationResult {
    /// Power factor 1 / (1 - d·F)
    pub power_factor: f64,

    /// Shape factor 1 / (1 - (t/n)·F1); exactly 1 when shape inputs are absent
    pub shape_factor: f64,

    /// Total magnification = power factor × shape factor
    pub total: f64,

    /// (total - 1) × 100
    pub percent_change: f64,

    /// True when the image is minified (total < 1)
    pub is_minification: bool,
}

/// Calculate spectacle magnification.
///
/// # Returns
///
/// * `Ok(SpectacleMagnificationResult)` - Magnification factors
/// * `Err(OpticsError)` - Invalid input, or a degenerate zero denominator
pub fn calculate(input: &SpectacleMagnificationInput) -> OpticsResult<SpectacleMagnificationResult> {
    input.validate()?;

    let d_m = input.vertex_distance_mm / 1000.0;
    let power_denominator = 1.0 - d_m * input.power_d;
    if power_denominator == 0.0 {
        return Err(OpticsError::calculation_failed(
            "SpectacleMagnification",
            "Power factor denominator is zero (1 - d*F = 0)",
        ));
    }
    let power_factor = 1.0 / power_denominator;

    let shape_factor = match input.shape_inputs() {
        Some((t_m, n, f1)) => {
            let shape_denominator = 1.0 - (t_m / n) * f1;
            if shape_denominator == 0.0 {
                return Err(OpticsError::calculation_failed(
                    "SpectacleMagnification",
                    "Shape factor denominator is zero (1 - (t/n)*F1 = 0)",
                ));
            }
            1.0 / shape_denominator
        }
        None => 1.0,
    };

    let total = power_factor * shape_factor;

    Ok(SpectacleMagnificationResult {
        power_factor,
        shape_factor,
        total,
        percent_change: (total - 1.0) * 100.0,
        is_minification: total < 1.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power_only(power_d: f64, vertex_distance_mm: f64) -> SpectacleMagnificationInput {
        SpectacleMagnificationInput {
            power_d,
            vertex_distance_mm,
            center_thickness_mm: None,
            refractive_index: None,
            base_curve_d: None,
        }
    }

    #[test]
    fn test_minus_lens_minifies() {
        let result = calculate(&power_only(-5.00, 12.0)).unwrap();
        // 1 / (1 - 0.012 * -5) = 1 / 1.06 = 0.9434
        assert!((result.power_factor - 0.9434).abs() < 0.001);
        assert!(result.is_minification);
        assert!(result.percent_change < 0.0);
    }

    #[test]
    fn test_plus_lens_magnifies() {
        let result = calculate(&power_only(5.00, 12.0)).unwrap();
        // 1 / (1 - 0.012 * 5) = 1 / 0.94 = 1.0638
        assert!((result.power_factor - 1.0638).abs() < 0.001);
        assert!(!result.is_minification);
        assert!(result.percent_change > 0.0);
    }

    #[test]
    fn test_shape_factor_neutral_without_inputs() {
        let result = calculate(&power_only(-5.00, 12.0)).unwrap();
        assert_eq!(result.shape_factor, 1.0);
        assert_eq!(result.total, result.power_factor);
    }

    #[test]
    fn test_shape_factor_neutral_with_partial_inputs() {
        // Thickness alone is not enough for a shape factor
        let input = SpectacleMagnificationInput {
            center_thickness_mm: Some(2.2),
            ..power_only(-5.00, 12.0)
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.shape_factor, 1.0);
    }

    #[test]
    fn test_shape_factor_neutral_with_zero_thickness() {
        let input = SpectacleMagnificationInput {
            center_thickness_mm: Some(0.0),
            refractive_index: Some(1.498),
            base_curve_d: Some(6.0),
            ..power_only(-5.00, 12.0)
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.shape_factor, 1.0);
    }

    #[test]
    fn test_full_shape_factor() {
        let input = SpectacleMagnificationInput {
            center_thickness_mm: Some(2.2),
            refractive_index: Some(1.498),
            base_curve_d: Some(6.0),
            ..power_only(-5.00, 12.0)
        };
        let result = calculate(&input).unwrap();
        // shape = 1 / (1 - (0.0022 / 1.498) * 6) = 1 / (1 - 0.008812) = 1.00889
        assert!((result.shape_factor - 1.00889).abs() < 0.0001);
        assert!((result.total - result.power_factor * result.shape_factor).abs() < 1e-12);
    }

    #[test]
    fn test_plano_is_unity() {
        let result = calculate(&power_only(0.0, 12.0)).unwrap();
        assert_eq!(result.power_factor, 1.0);
        assert_eq!(result.total, 1.0);
        assert_eq!(result.percent_change, 0.0);
        assert!(!result.is_minification);
    }

    #[test]
    fn test_degenerate_denominator() {
        // d = 0.010 m, F = 100 D
        assert!(calculate(&power_only(100.0, 10.0)).is_err());
    }

    #[test]
    fn test_invalid_input() {
        assert!(calculate(&power_only(f64::NAN, 12.0)).is_err());

        let bad_index = SpectacleMagnificationInput {
            center_thickness_mm: Some(2.0),
            refractive_index: Some(0.9),
            base_curve_d: Some(6.0),
            ..power_only(-5.0, 12.0)
        };
        assert!(calculate(&bad_index).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = SpectacleMagnificationInput {
            center_thickness_mm: Some(2.2),
            refractive_index: Some(1.498),
            base_curve_d: Some(6.0),
            ..power_only(-5.0, 12.0)
        };
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: SpectacleMagnificationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
