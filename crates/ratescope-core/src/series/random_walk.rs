//! Seeded symmetric random walk.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a walk of `len` points starting at `start`.
///
/// Each of the `len - 1` steps is `+step_size` or `-step_size` with equal
/// probability, drawn from a `StdRng` seeded with `seed`. The same
/// `(start, len, step_size, seed)` always yields the same sequence.
///
/// # Example
///
/// ```rust
/// use ratescope_core::series::random_walk;
///
/// let walk = random_walk(5.0, 4, 0.05, 41);
/// assert_eq!(walk.len(), 4);
/// assert_eq!(walk[0], 5.0);
/// assert_eq!(walk, random_walk(5.0, 4, 0.05, 41));
/// ```
#[must_use]
pub fn random_walk(start: f64, len: usize, step_size: f64, seed: u64) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut walk = Vec::with_capacity(len);
    let mut current = start;
    walk.push(current);

    for _ in 1..len {
        let step = if rng.random_bool(0.5) {
            step_size
        } else {
            -step_size
        };
        current += step;
        walk.push(current);
    }

    walk
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_and_single() {
        assert!(random_walk(1.0, 0, 0.05, 1).is_empty());
        assert_eq!(random_walk(1.0, 1, 0.05, 1), vec![1.0]);
    }

    #[test]
    fn test_steps_are_plus_or_minus_step_size() {
        let walk = random_walk(5.0, 500, 0.25, 7);
        for pair in walk.windows(2) {
            assert_relative_eq!((pair[1] - pair[0]).abs(), 0.25, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_seed_changes_sequence() {
        let a = random_walk(5.0, 200, 0.05, 41);
        let b = random_walk(5.0, 200, 0.05, 42);
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_step_is_flat() {
        let walk = random_walk(3.5, 10, 0.0, 41);
        assert!(walk.iter().all(|v| *v == 3.5));
    }
}
