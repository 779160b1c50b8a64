//! Least-used selection over a slice of usage counters.
//!
//! The minimum is computed before any index is collected, so the result does
//! not depend on the order in which counters are visited.

use rand::Rng;

/// Returns the indices of every counter equal to the global minimum, in
/// ascending order. Empty only when `counts` is empty.
pub fn least_used_indices(counts: &[u64]) -> Vec<usize> {
    let Some(&min) = counts.iter().min() else {
        return Vec::new();
    };
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == min)
        .map(|(i, _)| i)
        .collect()
}

/// Picks one index uniformly at random among the least-used counters.
///
/// # Returns
///
/// `None` if `counts` is empty, otherwise the chosen index.
pub fn pick_least_used<R: Rng>(counts: &[u64], rng: &mut R) -> Option<usize> {
    let candidates = least_used_indices(counts);
    if candidates.is_empty() {
        return None;
    }
    let pick = rng.random_range(0..candidates.len());
    Some(candidates[pick])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_least_used_indices() {
        assert_eq!(least_used_indices(&[3, 1, 2, 1]), vec![1, 3]);
        assert_eq!(least_used_indices(&[0, 0, 0]), vec![0, 1, 2]);
        assert_eq!(least_used_indices(&[5]), vec![0]);
        assert!(least_used_indices(&[]).is_empty());
    }

    #[test]
    fn test_smaller_value_late_in_order() {
        // A strictly smaller counter near the end must drop earlier ties.
        assert_eq!(least_used_indices(&[2, 2, 2, 0]), vec![3]);
        assert_eq!(least_used_indices(&[1, 4, 1, 0, 0]), vec![3, 4]);
    }

    #[test]
    fn test_pick_only_from_minimum() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let idx = pick_least_used(&[4, 2, 9, 2, 3], &mut rng).unwrap();
            assert!(idx == 1 || idx == 3);
        }
    }

    #[test]
    fn test_pick_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_least_used(&[], &mut rng), None);
    }

    #[test]
    fn test_pick_spreads_over_ties() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits = [0usize; 3];
        for _ in 0..3000 {
            hits[pick_least_used(&[1, 1, 1], &mut rng).unwrap()] += 1;
        }
        // Uniform choice: each tie is picked roughly a third of the time.
        for h in hits {
            assert!(h > 800 && h < 1200, "skewed tie-break: {:?}", hits);
        }
    }
}
