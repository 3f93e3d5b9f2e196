//! # Practice Session
//!
//! Mutable state for one practice run: the drawn problems in order, the
//! recorded responses, and the running score. A session is owned by a
//! single caller, lives only for the run, and is never persisted by this
//! crate. External progress trackers get the [`SessionSummary`] - final
//! counts and pass/fail only, never the raw per-answer records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{OpticsError, OpticsResult};
use crate::practice::grader::{self, GradeOutcome};
use crate::practice::problem::PracticeProblem;

/// Pass threshold for practice drills (percent).
pub const PRACTICE_PASS_PERCENT: u32 = 70;

/// Pass threshold for lesson quizzes (percent). Independent of the
/// practice threshold; the two must not be unified.
pub const QUIZ_PASS_PERCENT: u32 = 80;

/// One graded response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// Id of the problem answered
    pub problem_id: String,

    /// The raw submission as typed
    pub user_answer: String,

    /// Whether it graded correct
    pub was_correct: bool,
}

/// State for one practice run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSession {
    /// Session identity, for external summary references
    pub id: Uuid,

    /// When the session started
    pub started: DateTime<Utc>,

    /// The drawn problems, in presentation order
    pub problems: Vec<PracticeProblem>,

    /// Index of the next unanswered problem
    pub current: usize,

    /// Graded responses, one per answered problem
    pub responses: Vec<ResponseRecord>,
}

impl PracticeSession {
    /// Start a session over the given problems.
    pub fn new(problems: Vec<PracticeProblem>) -> Self {
        PracticeSession {
            id: Uuid::new_v4(),
            started: Utc::now(),
            problems,
            current: 0,
            responses: Vec::new(),
        }
    }

    /// The problem awaiting an answer, if any
    pub fn current_problem(&self) -> Option<&PracticeProblem> {
        self.problems.get(self.current)
    }

    /// Grade a submission for the current problem, record it, and advance.
    ///
    /// # Returns
    ///
    /// * `Ok(GradeOutcome)` - The grading result just recorded
    /// * `Err(OpticsError)` - The session is already complete
    pub fn submit(&mut self, user_text: &str) -> OpticsResult<GradeOutcome> {
        let problem = self.problems.get(self.current).ok_or_else(|| {
            OpticsError::calculation_failed("PracticeSession", "Session is already complete")
        })?;

        let outcome = grader::grade(problem, user_text);
        self.responses.push(ResponseRecord {
            problem_id: problem.id.clone(),
            user_answer: user_text.to_string(),
            was_correct: outcome.is_correct,
        });
        self.current += 1;
        Ok(outcome)
    }

    /// Number of problems answered correctly so far
    pub fn correct_count(&self) -> usize {
        self.responses.iter().filter(|r| r.was_correct).count()
    }

    /// Total problems in the session
    pub fn total_count(&self) -> usize {
        self.problems.len()
    }

    /// True when every problem has been answered
    pub fn is_complete(&self) -> bool {
        self.current >= self.problems.len()
    }

    /// Score as a rounded percentage of the full session
    pub fn score_percent(&self) -> u32 {
        if self.problems.is_empty() {
            return 0;
        }
        let percent = 100.0 * self.correct_count() as f64 / self.total_count() as f64;
        percent.round() as u32
    }

    /// Whether the score meets the given threshold (percent)
    pub fn passed(&self, threshold_percent: u32) -> bool {
        self.score_percent() >= threshold_percent
    }

    /// Final summary for an external progress tracker.
    ///
    /// Exposes counts and the pass flag only; per-answer records stay in
    /// the session.
    pub fn summary(&self, threshold_percent: u32) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            started: self.started,
            finished: Utc::now(),
            total_count: self.total_count(),
            correct_count: self.correct_count(),
            score_percent: self.score_percent(),
            passed: self.passed(threshold_percent),
        }
    }
}

/// Score summary released at session end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    pub total_count: usize,
    pub correct_count: usize,
    pub score_percent: u32,
    pub passed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::CalculationKind;
    use crate::practice::problem::Difficulty;

    fn three_problems() -> Vec<PracticeProblem> {
        vec![
            PracticeProblem::numeric(
                "p1",
                CalculationKind::SphericalEquivalent,
                Difficulty::Easy,
                "SE of -2.00 -1.00?",
                -2.50,
            ),
            PracticeProblem::numeric(
                "p2",
                CalculationKind::PrenticePrism,
                Difficulty::Easy,
                "Prism for 5 mm at -4.00 D?",
                2.00,
            ),
            PracticeProblem::text(
                "p3",
                CalculationKind::PrenticePrism,
                Difficulty::Medium,
                "Base direction?",
                "base out",
            ),
        ]
    }

    #[test]
    fn test_session_progression() {
        let mut session = PracticeSession::new(three_problems());
        assert_eq!(session.current_problem().unwrap().id, "p1");
        assert!(!session.is_complete());

        assert!(session.submit("-2.50").unwrap().is_correct);
        assert_eq!(session.current_problem().unwrap().id, "p2");

        assert!(!session.submit("3.00").unwrap().is_correct);
        assert!(session.submit("base out").unwrap().is_correct);

        assert!(session.is_complete());
        assert_eq!(session.correct_count(), 2);
        // round(100 * 2/3) = 67
        assert_eq!(session.score_percent(), 67);
    }

    #[test]
    fn test_thresholds_independent() {
        let mut session = PracticeSession::new(three_problems());
        session.submit("-2.50").unwrap();
        session.submit("2.00").unwrap();
        session.submit("base in").unwrap();

        // 2 of 3 correct -> 67%, under both thresholds
        assert_eq!(session.score_percent(), 67);
        assert!(!session.passed(PRACTICE_PASS_PERCENT));
        assert!(!session.passed(QUIZ_PASS_PERCENT));

        let mut aced = PracticeSession::new(three_problems());
        aced.submit("-2.50").unwrap();
        aced.submit("2.00").unwrap();
        aced.submit("out").unwrap();
        assert_eq!(aced.score_percent(), 100);
        assert!(aced.passed(PRACTICE_PASS_PERCENT));
        assert!(aced.passed(QUIZ_PASS_PERCENT));
    }

    #[test]
    fn test_submit_after_complete_errors() {
        let mut session = PracticeSession::new(vec![three_problems().remove(0)]);
        session.submit("-2.50").unwrap();
        assert!(session.submit("again").is_err());
    }

    #[test]
    fn test_empty_session_scores_zero() {
        let session = PracticeSession::new(Vec::new());
        assert!(session.is_complete());
        assert_eq!(session.score_percent(), 0);
    }

    #[test]
    fn test_summary_exposes_counts_only() {
        let mut session = PracticeSession::new(three_problems());
        session.submit("-2.50").unwrap();
        session.submit("2.00").unwrap();
        session.submit("base out").unwrap();

        let summary = session.summary(PRACTICE_PASS_PERCENT);
        assert_eq!(summary.session_id, session.id);
        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.correct_count, 3);
        assert_eq!(summary.score_percent, 100);
        assert!(summary.passed);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("user_answer"));
    }

    #[test]
    fn test_serialization() {
        let session = PracticeSession::new(three_problems());
        let json = serde_json::to_string(&session).unwrap();
        let roundtrip: PracticeSession = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.id, session.id);
        assert_eq!(roundtrip.problems.len(), 3);
    }
}
