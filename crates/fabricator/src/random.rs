use std::cell::RefCell;

use rand::{
    Rng, SeedableRng, TryRngCore,
    rngs::{OsRng, StdRng},
};

/// Number of discrete steps a random range is divided into.
pub const RESOLUTION: u32 = 2_000_000;

/// A source of uniformly distributed values within a closed interval.
///
/// Implementations own (or share) whatever state they need, so callers only
/// hold `&self`. Tests substitute deterministic implementations.
pub trait RandomRange {
    /// Returns a value between `lower` and `upper`, inclusive.
    ///
    /// If `lower > upper` the value lies between `upper` and `lower`.
    fn random_range(&self, lower: f64, upper: f64) -> f64;
}

impl<T: RandomRange + ?Sized> RandomRange for &T {
    fn random_range(&self, lower: f64, upper: f64) -> f64 {
        (**self).random_range(lower, upper)
    }
}

/// Maps a step in `0..RESOLUTION` onto the interval from `lower` to `upper`.
#[must_use]
pub fn scale(step: u32, lower: f64, upper: f64) -> f64 {
    lower + (f64::from(step) / f64::from(RESOLUTION)) * (upper - lower)
}

/// Random ranges drawn from the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsRandom;

impl RandomRange for OsRandom {
    /// # Panics
    ///
    /// Panics if the operating system entropy source is unavailable.
    fn random_range(&self, lower: f64, upper: f64) -> f64 {
        let step = OsRng.unwrap_err().random_range(0..RESOLUTION);
        scale(step, lower, upper)
    }
}

/// Random ranges drawn from a seeded generator.
///
/// Produces the same sequence for the same seed, for reproducible runs.
/// Not suitable where unpredictability matters; use [`OsRandom`] there.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: RefCell<StdRng>,
}

impl SeededRandom {
    /// Creates a generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomRange for SeededRandom {
    fn random_range(&self, lower: f64, upper: f64) -> f64 {
        let step = self.rng.borrow_mut().random_range(0..RESOLUTION);
        scale(step, lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn assert_draws_within(rng: &impl RandomRange, lower: f64, upper: f64) {
        for _ in 0..1000 {
            let value = rng.random_range(lower, upper);
            assert!(
                (lower..=upper).contains(&value),
                "{value} outside [{lower}, {upper}]"
            );
        }
    }

    #[test]
    fn os_draws_stay_in_range() {
        assert_draws_within(&OsRandom, 12.34, 89.34);
    }

    #[test]
    fn os_draws_stay_in_narrow_range() {
        assert_draws_within(&OsRandom, 15.5236, 15.5240);
    }

    #[test]
    fn seeded_draws_stay_in_range() {
        let rng = SeededRandom::new(7);
        assert_draws_within(&rng, -3.0, 3.0);
        assert_draws_within(&rng, 15.5236, 15.5240);
    }

    #[test]
    fn reversed_bounds_stay_between() {
        for _ in 0..1000 {
            let value = OsRandom.random_range(2.0, 1.0);
            assert!((1.0..=2.0).contains(&value), "{value} outside [1, 2]");
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_width_returns_bound() {
        for _ in 0..100 {
            assert_eq!(OsRandom.random_range(4.2, 4.2), 4.2);
        }
    }

    #[test]
    fn scale_maps_endpoints() {
        assert_relative_eq!(scale(0, 10.0, 20.0), 10.0);
        assert_relative_eq!(scale(RESOLUTION / 2, 10.0, 20.0), 15.0);
        assert!(scale(RESOLUTION - 1, 10.0, 20.0) < 20.0);
    }

    #[test]
    fn equal_seeds_repeat_draws() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        for _ in 0..100 {
            assert_relative_eq!(a.random_range(0.0, 1.0), b.random_range(0.0, 1.0));
        }
    }

    #[test]
    fn narrow_draws_fill_buckets_evenly() {
        const BUCKETS: usize = 10;
        const DRAWS: usize = 100_000;

        let (lower, upper) = (15.5236, 15.5240);
        let mut counts = [0usize; BUCKETS];
        for _ in 0..DRAWS {
            let value = OsRandom.random_range(lower, upper);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let bucket = (((value - lower) / (upper - lower)) * BUCKETS as f64) as usize;
            counts[bucket.min(BUCKETS - 1)] += 1;
        }

        let expected = DRAWS / BUCKETS;
        for (bucket, count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected / 10,
                "bucket {bucket} has {count} draws, expected about {expected}"
            );
        }
    }
}
