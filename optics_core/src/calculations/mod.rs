//! # Optical Calculations
//!
//! This module contains all optical calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, OpticsError>` - Pure calculation function
//!
//! Every operation validates its numeric inputs up front: non-finite or
//! missing fields come back as structured errors, never as a panic and
//! never as a silently wrong number. Domain edge cases (zero cylinder,
//! plano power, the sag crossover) are not errors and have defined,
//! deterministic handling documented per module.
//!
//! ## Available Calculations
//!
//! - [`transposition`] - Plus-cylinder / minus-cylinder rewriting
//! - [`spherical_equivalent`] - Single-value approximation of a script
//! - [`vertex`] - Vertex distance power compensation
//! - [`prentice`] - Prentice's rule induced prism
//! - [`thickness`] - Lens edge/center thickness estimate
//! - [`magnification`] - Spectacle magnification (power and shape factors)

pub mod magnification;
pub mod prentice;
pub mod spherical_equivalent;
pub mod thickness;
pub mod transposition;
pub mod vertex;

use serde::{Deserialize, Serialize};

use crate::errors::OpticsResult;
use crate::prescription::Prescription;

// Re-export commonly used types
pub use magnification::{SpectacleMagnificationInput, SpectacleMagnificationResult};
pub use prentice::{BaseDirection, DecentrationDirection, PrenticePrismInput, PrenticePrismResult};
pub use spherical_equivalent::BinocularSphericalEquivalent;
pub use thickness::{LensThicknessInput, LensThicknessResult};
pub use vertex::{VertexCompensationInput, VertexCompensationResult};

/// The calculation kinds the engine supports.
///
/// Used both for request dispatch and for tagging practice problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationKind {
    Transposition,
    SphericalEquivalent,
    VertexCompensation,
    PrenticePrism,
    LensThickness,
    SpectacleMagnification,
}

impl CalculationKind {
    /// All kinds, for UI listing and catalog grouping
    pub const ALL: [CalculationKind; 6] = [
        CalculationKind::Transposition,
        CalculationKind::SphericalEquivalent,
        CalculationKind::VertexCompensation,
        CalculationKind::PrenticePrism,
        CalculationKind::LensThickness,
        CalculationKind::SpectacleMagnification,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculationKind::Transposition => "Transposition",
            CalculationKind::SphericalEquivalent => "Spherical Equivalent",
            CalculationKind::VertexCompensation => "Vertex Compensation",
            CalculationKind::PrenticePrism => "Prentice's Rule Prism",
            CalculationKind::LensThickness => "Lens Thickness",
            CalculationKind::SpectacleMagnification => "Spectacle Magnification",
        }
    }
}

impl std::fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Tagged union over all calculation requests.
///
/// This allows heterogeneous requests to flow through a single entry point
/// (and a single JSON schema) while keeping each calculation's input type
/// precise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    /// Rewrite a script between cylinder forms
    Transposition { prescription: Prescription },
    /// Collapse a script to its spherical equivalent
    SphericalEquivalent { prescription: Prescription },
    /// Compensate power for a vertex distance change
    VertexCompensation(VertexCompensationInput),
    /// Induced prism from decentration
    PrenticePrism(PrenticePrismInput),
    /// Edge/center thickness estimate
    LensThickness(LensThicknessInput),
    /// Power/shape factor magnification
    SpectacleMagnification(SpectacleMagnificationInput),
}

impl CalculationRequest {
    /// Get the calculation kind
    pub fn kind(&self) -> CalculationKind {
        match self {
            CalculationRequest::Transposition { .. } => CalculationKind::Transposition,
            CalculationRequest::SphericalEquivalent { .. } => CalculationKind::SphericalEquivalent,
            CalculationRequest::VertexCompensation(_) => CalculationKind::VertexCompensation,
            CalculationRequest::PrenticePrism(_) => CalculationKind::PrenticePrism,
            CalculationRequest::LensThickness(_) => CalculationKind::LensThickness,
            CalculationRequest::SpectacleMagnification(_) => CalculationKind::SpectacleMagnification,
        }
    }

    /// Run the calculation this request describes.
    ///
    /// Each request either fully succeeds or fully fails as a unit; there
    /// is no partial result.
    pub fn evaluate(&self) -> OpticsResult<CalculationResult> {
        match self {
            CalculationRequest::Transposition { prescription } => {
                Ok(CalculationResult::Transposition {
                    prescription: transposition::transpose(prescription)?,
                })
            }
            CalculationRequest::SphericalEquivalent { prescription } => {
                Ok(CalculationResult::SphericalEquivalent {
                    se_d: spherical_equivalent::spherical_equivalent_of(prescription)?.0,
                })
            }
            CalculationRequest::VertexCompensation(input) => Ok(
                CalculationResult::VertexCompensation(vertex::calculate(input)?),
            ),
            CalculationRequest::PrenticePrism(input) => {
                Ok(CalculationResult::PrenticePrism(prentice::calculate(input)?))
            }
            CalculationRequest::LensThickness(input) => {
                Ok(CalculationResult::LensThickness(thickness::calculate(input)?))
            }
            CalculationRequest::SpectacleMagnification(input) => Ok(
                CalculationResult::SpectacleMagnification(magnification::calculate(input)?),
            ),
        }
    }
}

/// Tagged union over all calculation results.
///
/// Results are immutable value objects with no identity or lifecycle
/// beyond the call that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationResult {
    Transposition { prescription: Prescription },
    SphericalEquivalent { se_d: f64 },
    VertexCompensation(VertexCompensationResult),
    PrenticePrism(PrenticePrismResult),
    LensThickness(LensThicknessResult),
    SpectacleMagnification(SpectacleMagnificationResult),
}

impl CalculationResult {
    /// Get the calculation kind
    pub fn kind(&self) -> CalculationKind {
        match self {
            CalculationResult::Transposition { .. } => CalculationKind::Transposition,
            CalculationResult::SphericalEquivalent { .. } => CalculationKind::SphericalEquivalent,
            CalculationResult::VertexCompensation(_) => CalculationKind::VertexCompensation,
            CalculationResult::PrenticePrism(_) => CalculationKind::PrenticePrism,
            CalculationResult::LensThickness(_) => CalculationKind::LensThickness,
            CalculationResult::SpectacleMagnification(_) => CalculationKind::SpectacleMagnification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_dispatch() {
        let request = CalculationRequest::Transposition {
            prescription: Prescription::new(-2.0, Some(1.0), Some(90)),
        };
        assert_eq!(request.kind(), CalculationKind::Transposition);

        let result = request.evaluate().unwrap();
        assert_eq!(result.kind(), CalculationKind::Transposition);
        match result {
            CalculationResult::Transposition { prescription } => {
                assert_eq!(prescription.sphere_d, -1.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_request_error_propagation() {
        let request = CalculationRequest::SphericalEquivalent {
            prescription: Prescription::spherical(f64::NAN),
        };
        assert!(request.evaluate().is_err());
    }

    #[test]
    fn test_request_serialization() {
        let request = CalculationRequest::PrenticePrism(PrenticePrismInput {
            power_d: -4.0,
            decentration_mm: 5.0,
            direction: DecentrationDirection::In,
        });
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"type\":\"PrenticePrism\""));
        let roundtrip: CalculationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, roundtrip);
    }

    #[test]
    fn test_result_serialization() {
        let result = CalculationRequest::SphericalEquivalent {
            prescription: Prescription::new(-3.5, Some(2.0), Some(90)),
        }
        .evaluate()
        .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"type\":\"SphericalEquivalent\""));
        assert!(json.contains("-2.5"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CalculationKind::PrenticePrism.to_string(), "Prentice's Rule Prism");
        assert_eq!(CalculationKind::ALL.len(), 6);
    }
}
