//! Random activity generation.

use rand::Rng;
use time::{Duration, OffsetDateTime};

use octofit::models::NewActivity;

use crate::config::{ACTIVITY_TYPES, SeedConfig};

/// Generates workout sessions for seeded users.
#[derive(Debug, Clone)]
pub struct ActivityGenerator {
    config: SeedConfig,
}

impl Default for ActivityGenerator {
    fn default() -> Self {
        Self::new(SeedConfig::default())
    }
}

impl ActivityGenerator {
    pub fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Generates a single activity for `user_email`, dated relative to `now`.
    pub fn generate<R: Rng>(
        &self,
        user_email: &str,
        now: OffsetDateTime,
        rng: &mut R,
    ) -> NewActivity {
        let activity_type = ACTIVITY_TYPES[rng.gen_range(0..ACTIVITY_TYPES.len())];
        let duration = rng.gen_range(self.config.duration_minutes.clone());
        let calories = duration * rng.gen_range(self.config.calories_per_minute.clone());
        let days_ago = rng.gen_range(0..=self.config.max_days_ago);

        NewActivity {
            user_email: user_email.to_string(),
            activity_type: activity_type.to_string(),
            duration,
            calories,
            date: now - Duration::days(days_ago),
        }
    }

    /// Generates this user's full set of activities.
    pub fn generate_for_user<R: Rng>(
        &self,
        user_email: &str,
        now: OffsetDateTime,
        rng: &mut R,
    ) -> Vec<NewActivity> {
        let count = rng.gen_range(self.config.activities_per_user.clone());
        (0..count)
            .map(|_| self.generate(user_email, now, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_activities_stay_within_bounds() {
        let generator = ActivityGenerator::default();
        let mut rng = StdRng::seed_from_u64(42);
        let now = OffsetDateTime::now_utc();

        for _ in 0..50 {
            let activities = generator.generate_for_user("thor@asgard.com", now, &mut rng);
            assert!((5..=10).contains(&activities.len()));

            for activity in &activities {
                assert_eq!(activity.user_email, "thor@asgard.com");
                assert!(ACTIVITY_TYPES.contains(&activity.activity_type.as_str()));
                assert!((30..=120).contains(&activity.duration));
                assert_eq!(activity.calories % activity.duration, 0);
                assert!((5..=10).contains(&(activity.calories / activity.duration)));
                assert!(activity.date <= now);
                assert!(activity.date >= now - Duration::days(30));
            }
        }
    }

    #[test]
    fn test_same_seed_same_activities() {
        let generator = ActivityGenerator::default();
        let now = OffsetDateTime::now_utc();

        let first =
            generator.generate_for_user("hulk@avengers.com", now, &mut StdRng::seed_from_u64(7));
        let second =
            generator.generate_for_user("hulk@avengers.com", now, &mut StdRng::seed_from_u64(7));

        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_ranges_are_respected() {
        let generator = ActivityGenerator::new(SeedConfig {
            activities_per_user: 2..=2,
            duration_minutes: 10..=10,
            calories_per_minute: 3..=3,
            max_days_ago: 0,
            rng_seed: None,
        });
        let now = OffsetDateTime::now_utc();

        let activities =
            generator.generate_for_user("flash@justiceleague.com", now, &mut rand::thread_rng());

        assert_eq!(activities.len(), 2);
        for activity in activities {
            assert_eq!(activity.duration, 10);
            assert_eq!(activity.calories, 30);
            assert_eq!(activity.date, now);
        }
    }
}
