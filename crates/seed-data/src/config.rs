//! Configuration for sample data generation.

use std::ops::RangeInclusive;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Activity types drawn from when generating activities.
pub const ACTIVITY_TYPES: &[&str] = &[
    "Running",
    "Cycling",
    "Swimming",
    "Weightlifting",
    "Yoga",
    "Boxing",
];

/// Parameters for the randomized part of a seed run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Number of activities generated per user.
    pub activities_per_user: RangeInclusive<u32>,

    /// Activity duration in minutes.
    pub duration_minutes: RangeInclusive<i32>,

    /// Calories burned per minute; one multiplier is drawn per activity.
    pub calories_per_minute: RangeInclusive<i32>,

    /// How many days before the run an activity may be dated.
    pub max_days_ago: i64,

    /// Fixed RNG seed for reproducible runs.
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            activities_per_user: 5..=10,
            duration_minutes: 30..=120,
            calories_per_minute: 5..=10,
            max_days_ago: 30,
            rng_seed: None,
        }
    }
}

impl SeedConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// RNG for a run: seeded when `rng_seed` is set, from entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = SeedConfig::default().with_seed(99);
        let (mut a, mut b) = (config.rng(), config.rng());
        for _ in 0..5 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn test_defaults() {
        let config = SeedConfig::default();
        assert_eq!(config.activities_per_user, 5..=10);
        assert_eq!(config.duration_minutes, 30..=120);
        assert_eq!(config.calories_per_minute, 5..=10);
        assert_eq!(config.max_days_ago, 30);
        assert!(config.rng_seed.is_none());
    }
}
