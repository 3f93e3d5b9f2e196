//! # Practice Subsystem
//!
//! An immutable catalog of practice problems grouped by calculation kind
//! and difficulty, random selection without replacement, tolerance-based
//! grading, and per-session score tracking.
//!
//! ## Flow
//!
//! ```rust
//! use optics_core::practice::{bank, PracticeSession, PRACTICE_PASS_PERCENT};
//!
//! let problems = bank::select_problems(3, None);
//! let mut session = PracticeSession::new(problems);
//!
//! while let Some(problem) = session.current_problem().cloned() {
//!     let outcome = session.submit("42").unwrap();
//!     println!("{}: correct = {}", problem.id, outcome.is_correct);
//! }
//!
//! let summary = session.summary(PRACTICE_PASS_PERCENT);
//! println!("score: {}%", summary.score_percent);
//! ```

pub mod bank;
pub mod catalog;
pub mod grader;
pub mod problem;
pub mod session;

// Re-export commonly used types
pub use bank::{select_problems, select_problems_with_rng};
pub use grader::{grade, GradeOutcome, DEFAULT_NUMERIC_TOLERANCE};
pub use problem::{Answer, Difficulty, Given, PracticeProblem};
pub use session::{
    PracticeSession, ResponseRecord, SessionSummary, PRACTICE_PASS_PERCENT, QUIZ_PASS_PERCENT,
};
