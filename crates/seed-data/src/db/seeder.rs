//! Wipe-and-repopulate seeding.

use rand::Rng;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use octofit::errors::AppError;
use octofit::models::User;
use octofit::store::{RecordKind, Store};

use crate::config::SeedConfig;
use crate::generators::{ActivityGenerator, SQUADS, leaderboard_entry, workout_catalog};

/// Deletion order for the reset step.
const RESET_ORDER: [RecordKind; 5] = [
    RecordKind::Activity,
    RecordKind::Leaderboard,
    RecordKind::User,
    RecordKind::Team,
    RecordKind::Workout,
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] AppError),
}

/// Record counts observed after a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub teams: i64,
    pub users: i64,
    pub activities: i64,
    pub leaderboard: i64,
    pub workouts: i64,
}

/// Populates a store with the superhero sample data set.
pub struct Seeder {
    store: Store,
    activities: ActivityGenerator,
}

impl Seeder {
    pub fn new(store: Store) -> Self {
        Self::with_config(store, SeedConfig::default())
    }

    pub fn with_config(store: Store, config: SeedConfig) -> Self {
        Self {
            store,
            activities: ActivityGenerator::new(config),
        }
    }

    /// Deletes every existing record and writes a fresh data set.
    ///
    /// Any store failure aborts the run; records written before the failure
    /// are left in place.
    pub async fn populate<R: Rng>(&self, rng: &mut R) -> Result<SeedSummary, SeedError> {
        self.reset().await?;
        let users = self.seed_teams_and_users().await?;
        self.seed_activities(&users, rng).await?;
        self.seed_leaderboard(&users).await?;
        self.seed_workouts().await?;

        let summary = self.summary().await?;
        info!("Database population completed");
        Ok(summary)
    }

    async fn reset(&self) -> Result<(), SeedError> {
        info!("Clearing existing data...");
        for kind in RESET_ORDER {
            let removed = self.store.delete_all(kind).await?;
            info!("Removed {} rows from {}", removed, kind.table());
        }
        info!("Existing data cleared");
        Ok(())
    }

    async fn seed_teams_and_users(&self) -> Result<Vec<User>, SeedError> {
        info!("Creating teams and superhero users...");

        let mut users = Vec::new();
        for squad in &SQUADS {
            let team = self.store.create_team(&squad.team()).await?;
            info!("Created team {}", team.name);

            for member in squad.members(&team.name) {
                users.push(self.store.create_user(&member).await?);
            }
        }

        info!("Created {} superhero users", users.len());
        Ok(users)
    }

    async fn seed_activities<R: Rng>(&self, users: &[User], rng: &mut R) -> Result<(), SeedError> {
        info!("Creating activities...");

        let now = OffsetDateTime::now_utc();
        let mut created = 0;
        for user in users {
            for activity in self.activities.generate_for_user(&user.email, now, rng) {
                self.store.create_activity(&activity).await?;
                created += 1;
            }
        }

        info!("Created {} activities", created);
        Ok(())
    }

    async fn seed_leaderboard(&self, users: &[User]) -> Result<(), SeedError> {
        info!("Creating leaderboard entries...");

        for user in users {
            let activities = self.store.activities_for_user(&user.email).await?;
            self.store
                .create_leaderboard_entry(&leaderboard_entry(user, &activities))
                .await?;
        }

        info!("Created {} leaderboard entries", users.len());
        Ok(())
    }

    async fn seed_workouts(&self) -> Result<(), SeedError> {
        info!("Creating workout suggestions...");

        let catalog = workout_catalog();
        for workout in &catalog {
            self.store.create_workout(workout).await?;
        }

        info!("Created {} workouts", catalog.len());
        Ok(())
    }

    async fn summary(&self) -> Result<SeedSummary, SeedError> {
        Ok(SeedSummary {
            teams: self.store.count(RecordKind::Team).await?,
            users: self.store.count(RecordKind::User).await?,
            activities: self.store.count(RecordKind::Activity).await?,
            leaderboard: self.store.count(RecordKind::Leaderboard).await?,
            workouts: self.store.count(RecordKind::Workout).await?,
        })
    }
}
