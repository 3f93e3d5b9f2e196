//! # Prescription Types
//!
//! The sphero-cylindrical prescription value type shared by the calculation
//! modules, plus the OD/OS eye label.
//!
//! ## Conventions
//!
//! - Sphere and cylinder are signed diopters. Quarter-diopter steps are the
//!   clinical convention but are not enforced here.
//! - Axis is an integer in [1, 180]. When the cylinder is absent or zero the
//!   axis is meaningless; it is carried but ignored.
//!
//! ## Example
//!
//! ```rust
//! use optics_core::prescription::Prescription;
//!
//! let rx = Prescription::new(-2.00, Some(-1.00), Some(180));
//! assert!(rx.validate().is_ok());
//! assert_eq!(rx.to_string(), "-2.00 -1.00 x180");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, OpticsError, OpticsResult};

/// Eye designation per standard ophthalmic notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Eye {
    /// Oculus dexter (right eye)
    #[serde(rename = "OD")]
    Od,
    /// Oculus sinister (left eye)
    #[serde(rename = "OS")]
    Os,
}

impl Eye {
    /// Both eyes, OD first per chart convention
    pub const ALL: [Eye; 2] = [Eye::Od, Eye::Os];

    /// Get the chart abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            Eye::Od => "OD",
            Eye::Os => "OS",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Eye::Od => "Right (OD)",
            Eye::Os => "Left (OS)",
        }
    }
}

impl std::fmt::Display for Eye {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A sphero-cylindrical prescription.
///
/// Two prescriptions are optically equivalent if one is the transposition
/// of the other; see [`crate::calculations::transposition`].
///
/// ## JSON Example
///
/// ```json
/// { "sphere_d": -2.0, "cylinder_d": -1.0, "axis_deg": 180 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    /// Sphere power in diopters (signed)
    pub sphere_d: f64,

    /// Cylinder power in diopters (signed); None for spherical prescriptions
    pub cylinder_d: Option<f64>,

    /// Cylinder axis in degrees [1, 180]; meaningless when cylinder is absent or zero
    pub axis_deg: Option<u16>,
}

impl Prescription {
    pub fn new(sphere_d: f64, cylinder_d: Option<f64>, axis_deg: Option<u16>) -> Self {
        Self {
            sphere_d,
            cylinder_d,
            axis_deg,
        }
    }

    /// A sphere-only prescription
    pub fn spherical(sphere_d: f64) -> Self {
        Self {
            sphere_d,
            cylinder_d: None,
            axis_deg: None,
        }
    }

    /// Validate the prescription fields.
    ///
    /// The axis is required only when a nonzero cylinder is present; a
    /// stale axis on a spherical prescription is tolerated and ignored.
    pub fn validate(&self) -> OpticsResult<()> {
        require_finite("sphere_d", self.sphere_d)?;
        if let Some(cyl) = self.cylinder_d {
            require_finite("cylinder_d", cyl)?;
            if cyl != 0.0 {
                match self.axis_deg {
                    None => return Err(OpticsError::missing_field("axis_deg")),
                    Some(axis) if !(1..=180).contains(&axis) => {
                        return Err(OpticsError::invalid_input(
                            "axis_deg",
                            axis.to_string(),
                            "Axis must be between 1 and 180 degrees",
                        ));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    /// True when the cylinder is absent or zero
    pub fn is_spherical(&self) -> bool {
        self.cylinder_d.map_or(true, |cyl| cyl == 0.0)
    }

    /// Cylinder power, treating absence as zero
    pub fn cylinder_or_zero(&self) -> f64 {
        self.cylinder_d.unwrap_or(0.0)
    }
}

impl std::fmt::Display for Prescription {
    /// Conventional script form: "-2.00 -1.00 x180", or "-2.00 sph"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.cylinder_d, self.axis_deg) {
            (Some(cyl), Some(axis)) if cyl != 0.0 => {
                write!(f, "{:+.2} {:+.2} x{}", self.sphere_d, cyl, axis)
            }
            _ => write!(f, "{:+.2} sph", self.sphere_d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_prescription() {
        let rx = Prescription::new(-2.0, Some(-1.0), Some(180));
        assert!(rx.validate().is_ok());
        assert!(!rx.is_spherical());
    }

    #[test]
    fn test_spherical_prescription() {
        let rx = Prescription::spherical(-3.25);
        assert!(rx.validate().is_ok());
        assert!(rx.is_spherical());
        assert_eq!(rx.cylinder_or_zero(), 0.0);
    }

    #[test]
    fn test_zero_cylinder_is_spherical() {
        let rx = Prescription::new(1.5, Some(0.0), None);
        assert!(rx.validate().is_ok());
        assert!(rx.is_spherical());
    }

    #[test]
    fn test_missing_axis_rejected() {
        let rx = Prescription::new(-2.0, Some(-1.0), None);
        assert!(rx.validate().is_err());
    }

    #[test]
    fn test_axis_out_of_range_rejected() {
        let rx = Prescription::new(-2.0, Some(-1.0), Some(181));
        assert!(rx.validate().is_err());

        let rx = Prescription::new(-2.0, Some(-1.0), Some(0));
        assert!(rx.validate().is_err());
    }

    #[test]
    fn test_nan_sphere_rejected() {
        let rx = Prescription::spherical(f64::NAN);
        assert!(rx.validate().is_err());
    }

    #[test]
    fn test_display() {
        let rx = Prescription::new(-2.0, Some(-1.0), Some(180));
        assert_eq!(rx.to_string(), "-2.00 -1.00 x180");

        let sph = Prescription::spherical(0.75);
        assert_eq!(sph.to_string(), "+0.75 sph");
    }

    #[test]
    fn test_serialization() {
        let rx = Prescription::new(-3.5, Some(2.0), Some(90));
        let json = serde_json::to_string(&rx).unwrap();
        let roundtrip: Prescription = serde_json::from_str(&json).unwrap();
        assert_eq!(rx, roundtrip);
    }

    #[test]
    fn test_eye_serialization() {
        let json = serde_json::to_string(&Eye::Od).unwrap();
        assert_eq!(json, "\"OD\"");
    }
}
