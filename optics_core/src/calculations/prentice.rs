//! # Prentice's Rule Prism
//!
//! Induced prismatic effect from lens decentration:
//! prism (Δ) = decentration (cm) × |power| (D).
//!
//! The base direction is explicit in the result, determined by the lens
//! power sign and the decentration direction: a plus lens throws the base
//! in the direction of decentration, a minus lens throws it the opposite
//! way. The inverse form solves the decentration needed to induce a target
//! prism.
//!
//! ## Example
//!
//! ```rust
//! use optics_core::calculations::prentice::{calculate, DecentrationDirection, PrenticePrismInput};
//!
//! let input = PrenticePrismInput {
//!     power_d: -4.00,
//!     decentration_mm: 5.0,
//!     direction: DecentrationDirection::In,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.prism_diopters, 2.00);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, OpticsError, OpticsResult};
use crate::units::Millimeters;

/// Direction the lens optical center is displaced relative to the pupil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecentrationDirection {
    /// Toward the nose
    In,
    /// Toward the temple
    Out,
    /// Upward
    Up,
    /// Downward
    Down,
}

impl DecentrationDirection {
    /// All directions for UI selection
    pub const ALL: [DecentrationDirection; 4] = [
        DecentrationDirection::In,
        DecentrationDirection::Out,
        DecentrationDirection::Up,
        DecentrationDirection::Down,
    ];

    /// The opposite direction
    pub fn opposite(&self) -> Self {
        match self {
            DecentrationDirection::In => DecentrationDirection::Out,
            DecentrationDirection::Out => DecentrationDirection::In,
            DecentrationDirection::Up => DecentrationDirection::Down,
            DecentrationDirection::Down => DecentrationDirection::Up,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            DecentrationDirection::In => "in (nasal)",
            DecentrationDirection::Out => "out (temporal)",
            DecentrationDirection::Up => "up",
            DecentrationDirection::Down => "down",
        }
    }
}

/// Base direction of the induced prism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseDirection {
    BaseIn,
    BaseOut,
    BaseUp,
    BaseDown,
}

impl BaseDirection {
    /// Base direction induced by decentring a lens of the given power sign.
    ///
    /// Plus lens: base follows the decentration. Minus lens: base opposes it.
    pub fn from_decentration(power_d: f64, direction: DecentrationDirection) -> Self {
        let effective = if power_d >= 0.0 {
            direction
        } else {
            direction.opposite()
        };
        match effective {
            DecentrationDirection::In => BaseDirection::BaseIn,
            DecentrationDirection::Out => BaseDirection::BaseOut,
            DecentrationDirection::Up => BaseDirection::BaseUp,
            DecentrationDirection::Down => BaseDirection::BaseDown,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BaseDirection::BaseIn => "base in",
            BaseDirection::BaseOut => "base out",
            BaseDirection::BaseUp => "base up",
            BaseDirection::BaseDown => "base down",
        }
    }
}

impl std::fmt::Display for BaseDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for Prentice's rule.
///
/// ## JSON Example
///
/// ```json
/// { "power_d": -4.0, "decentration_mm": 5.0, "direction": "In" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrenticePrismInput {
    /// Lens power through the decentred meridian (diopters)
    pub power_d: f64,

    /// Decentration of the optical center from the pupil (mm)
    pub decentration_mm: f64,

    /// Direction of the decentration
    pub direction: DecentrationDirection,
}

impl PrenticePrismInput {
    /// Validate input parameters.
    pub fn validate(&self) -> OpticsResult<()> {
        require_finite("power_d", self.power_d)?;
        require_finite("decentration_mm", self.decentration_mm)?;
        if self.decentration_mm < 0.0 {
            return Err(OpticsError::invalid_input(
                "decentration_mm",
                self.decentration_mm.to_string(),
                "Decentration magnitude cannot be negative; use `direction` for sense",
            ));
        }
        Ok(())
    }

    /// Decentration in centimeters, as Prentice's rule expects
    pub fn decentration_cm(&self) -> f64 {
        self.decentration_mm / 10.0
    }
}

/// Results from Prentice's rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrenticePrismResult {
    /// Induced prism (prism diopters)
    pub prism_diopters: f64,

    /// Base direction; None for a plano lens (no prismatic effect)
    pub base: Option<BaseDirection>,

    /// Decentration echoed back in cm
    pub decentration_cm: f64,
}

/// Calculate induced prism from decentration.
pub fn calculate(input: &PrenticePrismInput) -> OpticsResult<PrenticePrismResult> {
    input.validate()?;

    let decentration_cm = input.decentration_cm();
    let prism_diopters = decentration_cm * input.power_d.abs();

    // A plano lens induces no prism regardless of decentration
    let base = if input.power_d == 0.0 || prism_diopters == 0.0 {
        None
    } else {
        Some(BaseDirection::from_decentration(input.power_d, input.direction))
    };

    Ok(PrenticePrismResult {
        prism_diopters,
        base,
        decentration_cm,
    })
}

/// Inverse form: solve the decentration that induces a target prism.
///
/// # Returns
///
/// * `Ok(Millimeters)` - Required decentration
/// * `Err(OpticsError)` - Invalid input, or a plano lens (no decentration
///   can induce prism through zero power)
pub fn solve_decentration(target_prism_diopters: f64, power_d: f64) -> OpticsResult<Millimeters> {
    require_finite("target_prism_diopters", target_prism_diopters)?;
    require_finite("power_d", power_d)?;
    if target_prism_diopters < 0.0 {
        return Err(OpticsError::invalid_input(
            "target_prism_diopters",
            target_prism_diopters.to_string(),
            "Prism magnitude cannot be negative",
        ));
    }
    if power_d == 0.0 {
        return Err(OpticsError::calculation_failed(
            "PrenticePrism",
            "A plano lens cannot induce prism by decentration",
        ));
    }

    let decentration_cm = target_prism_diopters / power_d.abs();
    Ok(Millimeters(decentration_cm * 10.0))
}
