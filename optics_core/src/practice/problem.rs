//! # Practice Problem Types
//!
//! A `PracticeProblem` is an immutable, content-authored record: question
//! text, given parameters, a precomputed canonical answer, and an
//! explanation with ordered solution steps. The catalog is ground truth;
//! canonical answers are derived with the formula engine at authoring time
//! and are not re-derived at runtime.

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationKind;

/// Problem difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in ascending order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Canonical answer: a number graded within tolerance, or a string graded
/// by the loose containment rule (see [`crate::practice::grader`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Answer {
    Numeric(f64),
    Text(String),
}

/// A named given parameter shown with the question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Given {
    pub name: String,
    pub value: f64,
}

impl Given {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A single practice problem.
///
/// Created at content-authoring time, immutable thereafter. Selection and
/// grading never modify a problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeProblem {
    /// Stable content id (e.g., "prentice-easy-1")
    pub id: String,

    /// Calculation kind this problem exercises
    pub kind: CalculationKind,

    /// Difficulty tier
    pub difficulty: Difficulty,

    /// Question text as presented to the student
    pub question: String,

    /// Named given parameters
    pub givens: Vec<Given>,

    /// Canonical answer
    pub answer: Answer,

    /// Numeric tolerance; None uses the grader default
    pub tolerance: Option<f64>,

    /// Unit label for the answer (display only)
    pub unit: Option<String>,

    /// Explanation shown after grading
    pub explanation: String,

    /// Ordered solution steps
    pub steps: Vec<String>,
}

impl PracticeProblem {
    /// Author a numeric-answer problem
    pub fn numeric(
        id: impl Into<String>,
        kind: CalculationKind,
        difficulty: Difficulty,
        question: impl Into<String>,
        answer: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            difficulty,
            question: question.into(),
            givens: Vec::new(),
            answer: Answer::Numeric(answer),
            tolerance: None,
            unit: None,
            explanation: String::new(),
            steps: Vec::new(),
        }
    }

    /// Author a text-answer problem
    pub fn text(
        id: impl Into<String>,
        kind: CalculationKind,
        difficulty: Difficulty,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            difficulty,
            question: question.into(),
            givens: Vec::new(),
            answer: Answer::Text(answer.into()),
            tolerance: None,
            unit: None,
            explanation: String::new(),
            steps: Vec::new(),
        }
    }

    /// Attach given parameters
    pub fn with_givens(mut self, givens: Vec<Given>) -> Self {
        self.givens = givens;
        self
    }

    /// Override the numeric tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Attach a unit label
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Attach the explanation text
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Attach ordered solution steps
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let problem = PracticeProblem::numeric(
            "se-test-1",
            CalculationKind::SphericalEquivalent,
            Difficulty::Easy,
            "What is the spherical equivalent of -2.00 -1.00 x180?",
            -2.50,
        )
        .with_unit("D")
        .with_tolerance(0.01)
        .with_givens(vec![Given::new("sphere_d", -2.0), Given::new("cylinder_d", -1.0)])
        .with_explanation("SE = sphere + cylinder / 2")
        .with_steps(vec!["Halve the cylinder: -0.50".to_string(), "Add to the sphere: -2.50".to_string()]);

        assert_eq!(problem.answer, Answer::Numeric(-2.50));
        assert_eq!(problem.tolerance, Some(0.01));
        assert_eq!(problem.givens.len(), 2);
        assert_eq!(problem.steps.len(), 2);
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn test_serialization() {
        let problem = PracticeProblem::text(
            "trans-test-1",
            CalculationKind::Transposition,
            Difficulty::Medium,
            "Transpose -2.00 +1.00 x90",
            "-1.00 -1.00 x180",
        );
        let json = serde_json::to_string(&problem).unwrap();
        assert!(json.contains("\"difficulty\":\"medium\""));
        let roundtrip: PracticeProblem = serde_json::from_str(&json).unwrap();
        assert_eq!(problem, roundtrip);
    }
}
