//! # Prescription Transposition
//!
//! Rewrites a sphero-cylindrical prescription between plus-cylinder and
//! minus-cylinder notation without changing its optical effect.
//!
//! ## Rule
//!
//! - new sphere = sphere + cylinder
//! - new cylinder = -cylinder
//! - new axis = axis + 90 if axis <= 90, else axis - 90
//!
//! The axis rule is applied exactly once per transposition; boundary values
//! (90 and 180) land on 180 and 90 respectively and are never re-wrapped.
//! Transposing twice returns the original prescription exactly.
//!
//! A prescription with zero (or absent) cylinder has nothing to transpose
//! and is returned unchanged, axis included. The `Prescription` type does
//! not model prism, so any prism annotation a caller holds alongside the
//! script is untouched by this operation.
//!
//! ## Example
//!
//! ```rust
//! use optics_core::calculations::transposition::transpose;
//! use optics_core::prescription::Prescription;
//!
//! let rx = Prescription::new(-2.00, Some(1.00), Some(90));
//! let flipped = transpose(&rx).unwrap();
//! assert_eq!(flipped.sphere_d, -1.00);
//! assert_eq!(flipped.cylinder_d, Some(-1.00));
//! assert_eq!(flipped.axis_deg, Some(180));
//! ```

use crate::errors::OpticsResult;
use crate::prescription::Prescription;

/// Flip an axis by 90 degrees within the [1, 180] convention.
pub fn flip_axis(axis_deg: u16) -> u16 {
    if axis_deg <= 90 {
        axis_deg + 90
    } else {
        axis_deg - 90
    }
}

/// Transpose a prescription to the opposite cylinder form.
///
/// # Returns
///
/// * `Ok(Prescription)` - The transposed (or unchanged, if spherical) script
/// * `Err(OpticsError)` - If the input fields are non-finite or inconsistent
pub fn transpose(rx: &Prescription) -> OpticsResult<Prescription> {
    rx.validate()?;

    // Zero cylinder: no meaningful transposition, and no spurious axis flip.
    if rx.is_spherical() {
        return Ok(*rx);
    }

    let cylinder = rx.cylinder_or_zero();
    // validate() guarantees the axis is present for a nonzero cylinder
    let axis = rx.axis_deg.expect("validated nonzero cylinder carries an axis");

    Ok(Prescription {
        sphere_d: rx.sphere_d + cylinder,
        cylinder_d: Some(-cylinder),
        axis_deg: Some(flip_axis(axis)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_transposition() {
        // Concrete scenario: -2.00 +1.00 x90 -> -1.00 -1.00 x180
        let rx = Prescription::new(-2.00, Some(1.00), Some(90));
        let result = transpose(&rx).unwrap();
        assert_eq!(result.sphere_d, -1.00);
        assert_eq!(result.cylinder_d, Some(-1.00));
        assert_eq!(result.axis_deg, Some(180));
    }

    #[test]
    fn test_axis_boundaries() {
        assert_eq!(flip_axis(90), 180);
        assert_eq!(flip_axis(180), 90);
        assert_eq!(flip_axis(1), 91);
        assert_eq!(flip_axis(91), 1);
        assert_eq!(flip_axis(45), 135);
    }

    #[test]
    fn test_double_transposition_roundtrip() {
        for &(sph, cyl, axis) in &[
            (-2.00, 1.00, 90),
            (1.25, -0.75, 45),
            (-3.50, 2.00, 180),
            (0.00, -2.25, 1),
        ] {
            let rx = Prescription::new(sph, Some(cyl), Some(axis));
            let once = transpose(&rx).unwrap();
            let twice = transpose(&once).unwrap();
            assert_eq!(twice.sphere_d, sph);
            assert_eq!(twice.cylinder_d, Some(cyl));
            assert_eq!(twice.axis_deg, Some(axis));
            // Intermediate axis differs by the +/-90 rule, not negation
            assert_ne!(once.axis_deg, Some(axis));
        }
    }

    #[test]
    fn test_zero_cylinder_unchanged() {
        let rx = Prescription::new(-1.75, Some(0.0), Some(35));
        let result = transpose(&rx).unwrap();
        assert_eq!(result, rx);

        let sph_only = Prescription::spherical(2.50);
        let result = transpose(&sph_only).unwrap();
        assert_eq!(result, sph_only);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let rx = Prescription::new(f64::NAN, Some(1.0), Some(90));
        assert!(transpose(&rx).is_err());

        let no_axis = Prescription::new(-2.0, Some(1.0), None);
        assert!(transpose(&no_axis).is_err());
    }

    #[test]
    fn test_sign_convention_flip() {
        // Minus-cyl form to plus-cyl form
        let rx = Prescription::new(-1.00, Some(-1.00), Some(180));
        let result = transpose(&rx).unwrap();
        assert_eq!(result.sphere_d, -2.00);
        assert_eq!(result.cylinder_d, Some(1.00));
        assert_eq!(result.axis_deg, Some(90));
    }
}
