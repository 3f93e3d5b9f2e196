//! # Problem Selection
//!
//! Draws random problem subsets from the catalog for a practice session.
//! Sampling is without replacement within one draw: a single call never
//! repeats a problem, and asking for more problems than the pool holds
//! returns the whole pool rather than erroring.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::calculations::CalculationKind;
use crate::practice::catalog;
use crate::practice::problem::PracticeProblem;

/// Select up to `count` random problems, optionally restricted to one
/// calculation kind.
pub fn select_problems(count: usize, kind: Option<CalculationKind>) -> Vec<PracticeProblem> {
    let mut rng = rand::thread_rng();
    select_problems_with_rng(&mut rng, count, kind)
}

/// Deterministic variant for seeded tests and reproducible drills.
pub fn select_problems_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    kind: Option<CalculationKind>,
) -> Vec<PracticeProblem> {
    let pool: Vec<&PracticeProblem> = match kind {
        Some(kind) => catalog::by_kind(kind),
        None => catalog::all().iter().collect(),
    };

    pool.choose_multiple(rng, count)
        .map(|problem| (*problem).clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_draw_count() {
        let problems = select_problems(3, None);
        assert_eq!(problems.len(), 3);
    }

    #[test]
    fn test_no_repeats_within_draw() {
        let problems = select_problems(10, None);
        let mut ids: Vec<&str> = problems.iter().map(|p| p.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_kind_filter() {
        let problems = select_problems(2, Some(CalculationKind::Transposition));
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().all(|p| p.kind == CalculationKind::Transposition));
    }

    #[test]
    fn test_oversized_request_returns_pool() {
        let pool_size = catalog::by_kind(CalculationKind::VertexCompensation).len();
        let problems = select_problems(1000, Some(CalculationKind::VertexCompensation));
        assert_eq!(problems.len(), pool_size);
    }

    #[test]
    fn test_deterministic_with_seeded_rng() {
        let mut a = StepRng::new(7, 13);
        let mut b = StepRng::new(7, 13);
        let first = select_problems_with_rng(&mut a, 5, None);
        let second = select_problems_with_rng(&mut b, 5, None);
        let first_ids: Vec<&str> = first.iter().map(|p| p.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }
}
