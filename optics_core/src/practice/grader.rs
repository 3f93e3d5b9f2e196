//! # Answer Grading
//!
//! Compares a user's free-text submission against a problem's canonical
//! answer with type-appropriate tolerance rules.
//!
//! ## Numeric answers
//!
//! The submission is normalized by mapping the Unicode minus sign to the
//! ASCII hyphen and stripping every character except digits, signs, and
//! the decimal point, then parsed as `f64`. Text that still fails to parse
//! grades as incorrect - it is never treated as zero. The parsed value is
//! correct within the problem's tolerance (default
//! [`DEFAULT_NUMERIC_TOLERANCE`]).
//!
//! ## String answers
//!
//! Both sides are lowercased and stripped of whitespace, then compared by
//! substring containment in either direction. This is a deliberately loose
//! match inherited from the original grading policy: "base out" accepts
//! "out", "base out", and "prism base out" alike. Do not tighten it to an
//! exact comparison without a product decision.
//!
//! Grading never mutates the problem; recording the outcome on a session
//! is the caller's job.

use serde::{Deserialize, Serialize};

use crate::practice::problem::{Answer, PracticeProblem};

/// Numeric tolerance used when a problem does not specify one
pub const DEFAULT_NUMERIC_TOLERANCE: f64 = 0.01;

/// Outcome of grading one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeOutcome {
    /// Whether the submission matched the canonical answer
    pub is_correct: bool,

    /// The submission after normalization (what was actually compared)
    pub normalized_answer: String,
}

/// Grade a submission against a problem's canonical answer.
pub fn grade(problem: &PracticeProblem, user_text: &str) -> GradeOutcome {
    match &problem.answer {
        Answer::Numeric(canonical) => grade_numeric(user_text, *canonical, problem.tolerance),
        Answer::Text(canonical) => grade_text(user_text, canonical),
    }
}

fn grade_numeric(user_text: &str, canonical: f64, tolerance: Option<f64>) -> GradeOutcome {
    let normalized = normalize_numeric_text(user_text);
    let tolerance = tolerance.unwrap_or(DEFAULT_NUMERIC_TOLERANCE);

    let is_correct = match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => (value - canonical).abs() <= tolerance,
        _ => false,
    };

    GradeOutcome {
        is_correct,
        normalized_answer: normalized,
    }
}

fn grade_text(user_text: &str, canonical: &str) -> GradeOutcome {
    let normalized = normalize_text(user_text);
    let target = normalize_text(canonical);

    // An empty submission matches nothing, even under containment
    let is_correct =
        !normalized.is_empty() && (normalized.contains(&target) || target.contains(&normalized));

    GradeOutcome {
        is_correct,
        normalized_answer: normalized,
    }
}

/// Keep digits, signs, and the decimal point; map the Unicode minus sign
/// (U+2212) to the ASCII hyphen first so "−2.75" parses.
fn normalize_numeric_text(text: &str) -> String {
    text.replace('\u{2212}', "-")
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
        .collect()
}

fn normalize_text(text: &str) -> String {
    text.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::CalculationKind;
    use crate::practice::problem::Difficulty;

    fn numeric_problem(answer: f64, tolerance: Option<f64>) -> PracticeProblem {
        let mut problem = PracticeProblem::numeric(
            "test-numeric",
            CalculationKind::SphericalEquivalent,
            Difficulty::Easy,
            "test",
            answer,
        );
        problem.tolerance = tolerance;
        problem
    }

    fn text_problem(answer: &str) -> PracticeProblem {
        PracticeProblem::text(
            "test-text",
            CalculationKind::PrenticePrism,
            Difficulty::Medium,
            "test",
            answer,
        )
    }

    #[test]
    fn test_numeric_within_tolerance() {
        let problem = numeric_problem(-2.75, Some(0.01));
        assert!(grade(&problem, "-2.75").is_correct);
        assert!(grade(&problem, "-2.7499").is_correct);
        assert!(!grade(&problem, "-2.80").is_correct);
    }

    #[test]
    fn test_unicode_minus_accepted() {
        let problem = numeric_problem(-2.75, Some(0.01));
        assert!(grade(&problem, "\u{2212}2.75").is_correct);
    }

    #[test]
    fn test_numeric_with_unit_text() {
        let problem = numeric_problem(2.00, None);
        let outcome = grade(&problem, "2.00 prism diopters");
        assert!(outcome.is_correct);
        assert_eq!(outcome.normalized_answer, "2.00");
    }

    #[test]
    fn test_default_tolerance() {
        let problem = numeric_problem(-2.50, None);
        assert!(grade(&problem, "-2.505").is_correct);
        assert!(!grade(&problem, "-2.52").is_correct);
    }

    #[test]
    fn test_unparsable_is_incorrect_not_zero() {
        let problem = numeric_problem(0.0, None);
        // Garbage must not coerce to 0 and accidentally match
        assert!(!grade(&problem, "no idea").is_correct);
        assert!(!grade(&problem, "1.2.3").is_correct);
        assert!(grade(&problem, "0").is_correct);
    }

    #[test]
    fn test_text_containment_both_directions() {
        let problem = text_problem("base out");
        assert!(grade(&problem, "base out").is_correct);
        assert!(grade(&problem, "out").is_correct); // canonical contains user
        assert!(grade(&problem, "prism base out").is_correct); // user contains canonical
        assert!(!grade(&problem, "base in").is_correct);
    }

    #[test]
    fn test_text_case_and_whitespace_insensitive() {
        let problem = text_problem("base out");
        assert!(grade(&problem, "  BASE   OUT ").is_correct);
        assert_eq!(grade(&problem, "  BASE   OUT ").normalized_answer, "baseout");
    }

    #[test]
    fn test_empty_submission_incorrect() {
        let problem = text_problem("base out");
        assert!(!grade(&problem, "").is_correct);
        assert!(!grade(&problem, "   ").is_correct);
    }

    #[test]
    fn test_grading_does_not_mutate_problem() {
        let problem = text_problem("base out");
        let before = problem.clone();
        let _ = grade(&problem, "base out");
        assert_eq!(problem, before);
    }
}
