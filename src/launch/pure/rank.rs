//! Candidate ranking
//!
//! Three stable sorts, applied in order: weight descending, score descending,
//! depth ascending. The last sort is the primary key, so the result is ordered
//! by depth first, then score, then weight, then input position.

use std::cmp::Reverse;

use crate::error::LaunchError;
use crate::launch::types::Candidate;

pub fn rank_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| Reverse(c.weight.unwrap_or(0)));
    candidates.sort_by_key(|c| Reverse(c.score));
    candidates.sort_by_key(|c| c.depth);
    candidates
}

/// Head of a ranked list, or [`LaunchError::NoExecutables`] if there is none
pub fn pick_best(ranked: Vec<Candidate>) -> Result<Candidate, LaunchError> {
    ranked.into_iter().next().ok_or(LaunchError::NoExecutables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(path: &str, weight: u64, score: i32, depth: usize) -> Candidate {
        Candidate::new(path)
            .with_weight(weight)
            .with_score(score)
            .with_depth(depth)
    }

    fn paths(ranked: &[Candidate]) -> Vec<&str> {
        ranked.iter().map(|c| c.path.as_str()).collect()
    }

    #[test]
    fn score_beats_weight() {
        let ranked = rank_candidates(vec![
            cand("game.exe", 500, 100, 1),
            cand("unins000.exe", 600, 50, 1),
        ]);
        assert_eq!(paths(&ranked), vec!["game.exe", "unins000.exe"]);
    }

    #[test]
    fn weight_breaks_score_ties() {
        let ranked = rank_candidates(vec![
            cand("small.exe", 10, 100, 1),
            cand("big.exe", 9000, 100, 1),
        ]);
        assert_eq!(paths(&ranked), vec!["big.exe", "small.exe"]);
    }

    #[test]
    fn depth_beats_score_and_weight() {
        let ranked = rank_candidates(vec![
            cand("bin/x64/huge.exe", 1 << 30, 100, 3),
            cand("launcher.exe", 100, 50, 1),
        ]);
        assert_eq!(paths(&ranked), vec!["launcher.exe", "bin/x64/huge.exe"]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let ranked = rank_candidates(vec![
            cand("b.exe", 42, 100, 1),
            cand("a.exe", 42, 100, 1),
            cand("c.exe", 42, 100, 1),
        ]);
        assert_eq!(paths(&ranked), vec!["b.exe", "a.exe", "c.exe"]);
    }

    #[test]
    fn empty_set_is_no_executables() {
        let err = pick_best(rank_candidates(vec![])).unwrap_err();
        assert!(matches!(err, LaunchError::NoExecutables));
    }

    #[test]
    fn pick_best_takes_head() {
        let best = pick_best(vec![cand("a.exe", 1, 100, 1), cand("b.exe", 1, 100, 1)]).unwrap();
        assert_eq!(best.path, "a.exe");
    }
}
