//! # Spherical Equivalent
//!
//! A single dioptric value approximating a sphero-cylindrical prescription:
//! SE = sphere + cylinder / 2.
//!
//! Sphere-only prescriptions pass through unchanged, and each eye is
//! computed independently with no cross-eye coupling.
//!
//! ## Example
//!
//! ```rust
//! use optics_core::calculations::spherical_equivalent::spherical_equivalent;
//!
//! let se = spherical_equivalent(-3.50, Some(2.00)).unwrap();
//! assert_eq!(se.0, -2.50);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, OpticsResult};
use crate::prescription::Prescription;
use crate::units::Diopters;

/// Compute the spherical equivalent of a sphere/cylinder pair.
///
/// An absent or non-finite cylinder contributes nothing: the sphere passes
/// through unchanged rather than poisoning the result.
pub fn spherical_equivalent(sphere_d: f64, cylinder_d: Option<f64>) -> OpticsResult<Diopters> {
    require_finite("sphere_d", sphere_d)?;
    let cylinder = cylinder_d.filter(|c| c.is_finite()).unwrap_or(0.0);
    Ok(Diopters(sphere_d + cylinder / 2.0))
}

/// Compute the spherical equivalent of a full prescription.
pub fn spherical_equivalent_of(rx: &Prescription) -> OpticsResult<Diopters> {
    rx.validate()?;
    spherical_equivalent(rx.sphere_d, rx.cylinder_d)
}

/// Spherical equivalents for a distance pair, one value per eye.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinocularSphericalEquivalent {
    /// Right eye SE (diopters)
    pub od_se_d: f64,
    /// Left eye SE (diopters)
    pub os_se_d: f64,
}

/// Compute spherical equivalents for both eyes.
///
/// The two eyes are independent calculations; an error in either input
/// fails the pair as a unit, but the values never mix.
pub fn binocular(od: &Prescription, os: &Prescription) -> OpticsResult<BinocularSphericalEquivalent> {
    Ok(BinocularSphericalEquivalent {
        od_se_d: spherical_equivalent_of(od)?.0,
        os_se_d: spherical_equivalent_of(os)?.0,
    })
}
