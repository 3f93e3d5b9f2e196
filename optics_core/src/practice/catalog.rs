//! # Problem Catalog
//!
//! The static, content-authored practice problem catalog. Every canonical
//! answer was derived with the formula engine at authoring time; the
//! catalog is trusted as ground truth and nothing here recomputes at
//! runtime.
//!
//! Coverage: every calculation kind has at least one problem per
//! difficulty tier.

use once_cell::sync::Lazy;

use crate::calculations::CalculationKind;
use crate::practice::problem::{Difficulty, Given, PracticeProblem};

/// The full problem catalog, built once on first access.
static CATALOG: Lazy<Vec<PracticeProblem>> = Lazy::new(build_catalog);

/// All problems in the catalog
pub fn all() -> &'static [PracticeProblem] {
    &CATALOG
}

/// Problems of one calculation kind
pub fn by_kind(kind: CalculationKind) -> Vec<&'static PracticeProblem> {
    CATALOG.iter().filter(|p| p.kind == kind).collect()
}

/// Look up a problem by its stable id
pub fn by_id(id: &str) -> Option<&'static PracticeProblem> {
    CATALOG.iter().find(|p| p.id == id)
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_catalog() -> Vec<PracticeProblem> {
    use CalculationKind::*;
    use Difficulty::*;

    vec![
        // ------------------------------------------------------------------
        // Transposition
        // ------------------------------------------------------------------
        PracticeProblem::text(
            "transposition-easy-1",
            Transposition,
            Easy,
            "Transpose to plus-cylinder form: +2.00 -1.00 x90",
            "+1.00 +1.00 x180",
        )
        .with_givens(vec![
            Given::new("sphere_d", 2.00),
            Given::new("cylinder_d", -1.00),
            Given::new("axis_deg", 90.0),
        ])
        .with_explanation(
            "Add the cylinder to the sphere, flip the cylinder sign, and rotate the axis by 90.",
        )
        .with_steps(steps_transpose("2.00 + (-1.00) = +1.00", "+1.00", "90 + 90 = 180")),
        PracticeProblem::text(
            "transposition-medium-1",
            Transposition,
            Medium,
            "Transpose: -2.00 +1.00 x90",
            "-1.00 -1.00 x180",
        )
        .with_givens(vec![
            Given::new("sphere_d", -2.00),
            Given::new("cylinder_d", 1.00),
            Given::new("axis_deg", 90.0),
        ])
        .with_explanation(
            "Add the cylinder to the sphere, flip the cylinder sign, and rotate the axis by 90. \
             The axis lands exactly on the 180 boundary and stays there.",
        )
        .with_steps(steps_transpose("-2.00 + 1.00 = -1.00", "-1.00", "90 + 90 = 180")),
        PracticeProblem::text(
            "transposition-hard-1",
            Transposition,
            Hard,
            "Transpose to plus-cylinder form: +3.25 -1.75 x45",
            "+1.50 +1.75 x135",
        )
        .with_givens(vec![
            Given::new("sphere_d", 3.25),
            Given::new("cylinder_d", -1.75),
            Given::new("axis_deg", 45.0),
        ])
        .with_explanation(
            "Add the cylinder to the sphere, flip the cylinder sign, and rotate the axis by 90.",
        )
        .with_steps(steps_transpose("3.25 + (-1.75) = +1.50", "+1.75", "45 + 90 = 135")),
        // ------------------------------------------------------------------
        // Spherical equivalent
        // ------------------------------------------------------------------
        PracticeProblem::numeric(
            "spherical-equivalent-easy-1",
            SphericalEquivalent,
            Easy,
            "What is the spherical equivalent of -2.00 -1.00 x180?",
            -2.50,
        )
        .with_unit("D")
        .with_givens(vec![Given::new("sphere_d", -2.00), Given::new("cylinder_d", -1.00)])
        .with_explanation("SE = sphere + cylinder / 2.")
        .with_steps(steps(&[
            "Halve the cylinder: -1.00 / 2 = -0.50",
            "Add to the sphere: -2.00 + (-0.50) = -2.50 D",
        ])),
        PracticeProblem::numeric(
            "spherical-equivalent-medium-1",
            SphericalEquivalent,
            Medium,
            "What is the spherical equivalent of -3.50 +2.00 x90?",
            -2.50,
        )
        .with_unit("D")
        .with_givens(vec![Given::new("sphere_d", -3.50), Given::new("cylinder_d", 2.00)])
        .with_explanation("SE = sphere + cylinder / 2; the cylinder sign carries through.")
        .with_steps(steps(&[
            "Halve the cylinder: +2.00 / 2 = +1.00",
            "Add to the sphere: -3.50 + 1.00 = -2.50 D",
        ])),
        PracticeProblem::numeric(
            "spherical-equivalent-hard-1",
            SphericalEquivalent,
            Hard,
            "A patient's script reads +4.25 -1.50 x60. What single spherical power best \
             approximates it?",
            3.50,
        )
        .with_unit("D")
        .with_givens(vec![Given::new("sphere_d", 4.25), Given::new("cylinder_d", -1.50)])
        .with_explanation(
            "The spherical equivalent collapses the cylinder into the sphere: SE = sphere + cyl/2. \
             The axis plays no role.",
        )
        .with_steps(steps(&[
            "Halve the cylinder: -1.50 / 2 = -0.75",
            "Add to the sphere: +4.25 + (-0.75) = +3.50 D",
        ])),
        // ------------------------------------------------------------------
        // Vertex compensation
        // ------------------------------------------------------------------
        PracticeProblem::numeric(
            "vertex-easy-1",
            VertexCompensation,
            Easy,
            "A -8.00 D spectacle lens sits at a 12 mm vertex distance. What contact lens \
             power gives the same correction?",
            -7.30,
        )
        .with_unit("D")
        .with_tolerance(0.05)
        .with_givens(vec![
            Given::new("power_d", -8.00),
            Given::new("old_vertex_mm", 12.0),
            Given::new("new_vertex_mm", 0.0),
        ])
        .with_explanation(
            "Fc = F / (1 - d*F) with d = 0.012 m. Moving a minus lens closer to the eye \
             needs less minus.",
        )
        .with_steps(steps(&[
            "d = 12 mm = 0.012 m",
            "Denominator: 1 - (0.012)(-8.00) = 1.096",
            "Fc = -8.00 / 1.096 = -7.30 D",
        ])),
        PracticeProblem::numeric(
            "vertex-medium-1",
            VertexCompensation,
            Medium,
            "A +8.00 D hyperope wears spectacles at 12 mm. What contact lens power is \
             required?",
            8.85,
        )
        .with_unit("D")
        .with_tolerance(0.05)
        .with_givens(vec![
            Given::new("power_d", 8.00),
            Given::new("old_vertex_mm", 12.0),
            Given::new("new_vertex_mm", 0.0),
        ])
        .with_explanation(
            "Fc = F / (1 - d*F). Moving a plus lens closer to the eye needs more plus - the \
             opposite of the minus-lens case.",
        )
        .with_steps(steps(&[
            "d = 12 mm = 0.012 m",
            "Denominator: 1 - (0.012)(8.00) = 0.904",
            "Fc = 8.00 / 0.904 = +8.85 D",
        ])),
        PracticeProblem::numeric(
            "vertex-hard-1",
            VertexCompensation,
            Hard,
            "Refracted power is -6.50 D at a 13.5 mm vertex distance. The patient is fit \
             with contact lenses. What power should be ordered?",
            -5.98,
        )
        .with_unit("D")
        .with_tolerance(0.05)
        .with_givens(vec![
            Given::new("power_d", -6.50),
            Given::new("old_vertex_mm", 13.5),
            Given::new("new_vertex_mm", 0.0),
        ])
        .with_explanation("Fc = F / (1 - d*F) with d = 0.0135 m.")
        .with_steps(steps(&[
            "d = 13.5 mm = 0.0135 m",
            "Denominator: 1 - (0.0135)(-6.50) = 1.08775",
            "Fc = -6.50 / 1.08775 = -5.98 D",
        ])),
        // ------------------------------------------------------------------
        // Prentice's rule
        // ------------------------------------------------------------------
        PracticeProblem::numeric(
            "prentice-easy-1",
            PrenticePrism,
            Easy,
            "A -4.00 D lens is decentred 5 mm. How much prism is induced?",
            2.00,
        )
        .with_unit("prism diopters")
        .with_givens(vec![
            Given::new("power_d", -4.00),
            Given::new("decentration_mm", 5.0),
        ])
        .with_explanation("Prism = decentration (cm) x power (D): 0.5 x 4.00 = 2.00.")
        .with_steps(steps(&[
            "Convert decentration: 5 mm = 0.5 cm",
            "Apply Prentice's rule: 0.5 x 4.00 = 2.00 prism diopters",
        ])),
        PracticeProblem::numeric(
            "prentice-easy-2",
            PrenticePrism,
            Easy,
            "A +2.50 D lens is decentred 3 mm. How much prism is induced?",
            0.75,
        )
        .with_unit("prism diopters")
        .with_givens(vec![
            Given::new("power_d", 2.50),
            Given::new("decentration_mm", 3.0),
        ])
        .with_explanation("Prism = decentration (cm) x power (D): 0.3 x 2.50 = 0.75.")
        .with_steps(steps(&[
            "Convert decentration: 3 mm = 0.3 cm",
            "Apply Prentice's rule: 0.3 x 2.50 = 0.75 prism diopters",
        ])),
        PracticeProblem::text(
            "prentice-medium-1",
            PrenticePrism,
            Medium,
            "A -4.00 D lens is decentred 5 mm IN (nasally). Which way does the induced \
             prism base point?",
            "base out",
        )
        .with_givens(vec![
            Given::new("power_d", -4.00),
            Given::new("decentration_mm", 5.0),
        ])
        .with_explanation(
            "A minus lens throws the base opposite the decentration; decentred in, the \
             base points out.",
        )
        .with_steps(steps(&[
            "Minus lens: base direction opposes the decentration",
            "Decentration is in (nasal), so the base is out (temporal)",
        ])),
        PracticeProblem::numeric(
            "prentice-hard-1",
            PrenticePrism,
            Hard,
            "How much decentration induces 1.5 prism diopters through a -6.00 D lens?",
            2.5,
        )
        .with_unit("mm")
        .with_tolerance(0.01)
        .with_givens(vec![
            Given::new("target_prism_diopters", 1.5),
            Given::new("power_d", -6.00),
        ])
        .with_explanation(
            "Invert Prentice's rule: decentration (cm) = prism / |power|, then convert to mm.",
        )
        .with_steps(steps(&[
            "Decentration = 1.5 / 6.00 = 0.25 cm",
            "Convert: 0.25 cm = 2.5 mm",
        ])),
        // ------------------------------------------------------------------
        // Lens thickness
        // ------------------------------------------------------------------
        PracticeProblem::numeric(
            "thickness-easy-1",
            LensThickness,
            Easy,
            "A frame's geometric center distance is 70 mm and the patient's PD is 62 mm. \
             How much is each lens decentred?",
            4.0,
        )
        .with_unit("mm")
        .with_givens(vec![
            Given::new("frame_pd_mm", 70.0),
            Given::new("patient_pd_mm", 62.0),
        ])
        .with_explanation("Per-lens decentration = |frame PD - patient PD| / 2.")
        .with_steps(steps(&[
            "Difference: 70 - 62 = 8 mm total",
            "Split between the two lenses: 8 / 2 = 4 mm each",
        ])),
        PracticeProblem::numeric(
            "thickness-medium-1",
            LensThickness,
            Medium,
            "Frame eye size 52 mm, frame PD 70 mm, patient PD 62 mm. What minimum blank \
             (effective) diameter is needed?",
            62.0,
        )
        .with_unit("mm")
        .with_givens(vec![
            Given::new("frame_eye_size_mm", 52.0),
            Given::new("frame_pd_mm", 70.0),
            Given::new("patient_pd_mm", 62.0),
        ])
        .with_explanation(
            "Effective diameter = eye size + 2 mm safety margin + 2 x decentration.",
        )
        .with_steps(steps(&[
            "Decentration: (70 - 62) / 2 = 4 mm",
            "Effective diameter: 52 + 2 + 2 x 4 = 62 mm",
        ])),
        PracticeProblem::numeric(
            "thickness-hard-1",
            LensThickness,
            Hard,
            "Estimate the edge thickness of a -5.00 D CR-39 lens (n = 1.498, 2.0 mm minimum \
             center): frame eye size 52 mm, frame PD 70 mm, patient PD 62 mm.",
            6.95,
        )
        .with_unit("mm")
        .with_tolerance(0.1)
        .with_givens(vec![
            Given::new("sphere_d", -5.00),
            Given::new("frame_eye_size_mm", 52.0),
            Given::new("frame_pd_mm", 70.0),
            Given::new("patient_pd_mm", 62.0),
        ])
        .with_explanation(
            "Compute the sag across the effective diameter from the surface radius, then add \
             the minimum center thickness: a minus lens is thickest at the edge.",
        )
        .with_steps(steps(&[
            "Effective diameter: 52 + 2 + 2 x 4 = 62 mm, so h = 31 mm",
            "Radius: (1.498 - 1) / (5.00 / 1000) = 99.6 mm",
            "Sag: 99.6 - sqrt(99.6^2 - 31^2) = 4.95 mm",
            "Edge: 2.0 + 4.95 = 6.95 mm",
        ])),
        // ------------------------------------------------------------------
        // Spectacle magnification
        // ------------------------------------------------------------------
        PracticeProblem::numeric(
            "magnification-easy-1",
            SpectacleMagnification,
            Easy,
            "A -5.00 D lens sits at a 12 mm vertex distance. What is the percent change in \
             retinal image size (power factor only)?",
            -5.66,
        )
        .with_unit("%")
        .with_tolerance(0.1)
        .with_givens(vec![
            Given::new("power_d", -5.00),
            Given::new("vertex_distance_mm", 12.0),
        ])
        .with_explanation(
            "Power factor = 1 / (1 - d*F); minus lenses minify, so the change is negative.",
        )
        .with_steps(steps(&[
            "d = 0.012 m",
            "Power factor: 1 / (1 - (0.012)(-5.00)) = 1 / 1.06 = 0.9434",
            "Percent change: (0.9434 - 1) x 100 = -5.66%",
        ])),
        PracticeProblem::numeric(
            "magnification-medium-1",
            SpectacleMagnification,
            Medium,
            "A +5.00 D lens sits at a 12 mm vertex distance. What is the percent change in \
             retinal image size (power factor only)?",
            6.38,
        )
        .with_unit("%")
        .with_tolerance(0.1)
        .with_givens(vec![
            Given::new("power_d", 5.00),
            Given::new("vertex_distance_mm", 12.0),
        ])
        .with_explanation("Power factor = 1 / (1 - d*F); plus lenses magnify.")
        .with_steps(steps(&[
            "d = 0.012 m",
            "Power factor: 1 / (1 - (0.012)(5.00)) = 1 / 0.94 = 1.0638",
            "Percent change: (1.0638 - 1) x 100 = +6.38%",
        ])),
        PracticeProblem::numeric(
            "magnification-hard-1",
            SpectacleMagnification,
            Hard,
            "A -5.00 D CR-39 lens (n = 1.498) at 12 mm vertex has a 2.2 mm center thickness \
             and a +6.00 D base curve. What is the total percent change in image size?",
            -4.82,
        )
        .with_unit("%")
        .with_tolerance(0.1)
        .with_givens(vec![
            Given::new("power_d", -5.00),
            Given::new("vertex_distance_mm", 12.0),
            Given::new("center_thickness_mm", 2.2),
            Given::new("refractive_index", 1.498),
            Given::new("base_curve_d", 6.00),
        ])
        .with_explanation(
            "Total magnification is the power factor times the shape factor; the shape \
             factor always magnifies slightly, offsetting some minification.",
        )
        .with_steps(steps(&[
            "Power factor: 1 / (1 + 0.012 x 5.00) = 0.9434",
            "Shape factor: 1 / (1 - (0.0022 / 1.498) x 6.00) = 1.0089",
            "Total: 0.9434 x 1.0089 = 0.9518",
            "Percent change: (0.9518 - 1) x 100 = -4.82%",
        ])),
    ]
}

// Transposition steps share a fixed three-step shape.
fn steps_transpose(sphere_step: &str, new_cyl: &str, axis_step: &str) -> Vec<String> {
    vec![
        format!("New sphere = sphere + cylinder: {}", sphere_step),
        format!("New cylinder = cylinder with flipped sign: {}", new_cyl),
        format!("New axis = axis rotated 90 degrees: {}", axis_step),
    ]
}
