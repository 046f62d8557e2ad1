//! The persistence contract shared by the API and the seeder.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    Activity, LeaderboardEntry, NewActivity, NewLeaderboardEntry, NewTeam, NewUser, NewWorkout,
    Team, User, Workout,
};

/// Shared handle to whichever store backs the process.
pub type Store = Arc<dyn RecordStore>;

/// The five kinds of record the tracker keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    User,
    Team,
    Activity,
    Leaderboard,
    Workout,
}

impl RecordKind {
    /// Backing table name.
    pub fn table(&self) -> &'static str {
        match self {
            RecordKind::User => "users",
            RecordKind::Team => "teams",
            RecordKind::Activity => "activities",
            RecordKind::Leaderboard => "leaderboard",
            RecordKind::Workout => "workouts",
        }
    }
}

/// Record persistence.
///
/// Identifiers and creation timestamps are assigned by the store. Lists come
/// back in creation order, except leaderboard entries which are ordered by
/// total calories, highest first.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Removes every record of `kind`, returning how many were removed.
    async fn delete_all(&self, kind: RecordKind) -> Result<u64, AppError>;

    async fn count(&self, kind: RecordKind) -> Result<i64, AppError>;

    /// Removes a single record. Returns false if no record had that id.
    async fn delete(&self, kind: RecordKind, id: Uuid) -> Result<bool, AppError>;

    async fn create_team(&self, team: &NewTeam) -> Result<Team, AppError>;
    async fn list_teams(&self) -> Result<Vec<Team>, AppError>;
    async fn get_team(&self, id: Uuid) -> Result<Option<Team>, AppError>;
    async fn update_team(&self, id: Uuid, team: &NewTeam) -> Result<Option<Team>, AppError>;

    async fn create_user(&self, user: &NewUser) -> Result<User, AppError>;
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, AppError>;
    async fn update_user(&self, id: Uuid, user: &NewUser) -> Result<Option<User>, AppError>;

    async fn create_activity(&self, activity: &NewActivity) -> Result<Activity, AppError>;
    async fn list_activities(&self) -> Result<Vec<Activity>, AppError>;
    async fn get_activity(&self, id: Uuid) -> Result<Option<Activity>, AppError>;
    async fn update_activity(
        &self,
        id: Uuid,
        activity: &NewActivity,
    ) -> Result<Option<Activity>, AppError>;

    /// Activities whose `user_email` equals `email`.
    async fn activities_for_user(&self, email: &str) -> Result<Vec<Activity>, AppError>;

    async fn create_leaderboard_entry(
        &self,
        entry: &NewLeaderboardEntry,
    ) -> Result<LeaderboardEntry, AppError>;
    async fn list_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError>;
    async fn get_leaderboard_entry(&self, id: Uuid)
    -> Result<Option<LeaderboardEntry>, AppError>;
    async fn update_leaderboard_entry(
        &self,
        id: Uuid,
        entry: &NewLeaderboardEntry,
    ) -> Result<Option<LeaderboardEntry>, AppError>;

    async fn create_workout(&self, workout: &NewWorkout) -> Result<Workout, AppError>;
    async fn list_workouts(&self) -> Result<Vec<Workout>, AppError>;
    async fn get_workout(&self, id: Uuid) -> Result<Option<Workout>, AppError>;
    async fn update_workout(
        &self,
        id: Uuid,
        workout: &NewWorkout,
    ) -> Result<Option<Workout>, AppError>;
}
