//! Transport representations of stored records.
//!
//! Store identifiers are exposed as strings named `id`. References to other
//! records stay the plain strings they are stored as.

use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::models::{Activity, Difficulty, LeaderboardEntry, Team, User, Workout};

#[derive(Debug, Serialize, ToSchema)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id.to_string(),
            name: team.name,
            description: team.description,
            created_at: team.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub team: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            team: user.team,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActivityResponse {
    pub id: String,
    pub user_email: String,
    pub activity_type: String,
    /// Minutes.
    pub duration: i32,
    pub calories: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id.to_string(),
            user_email: activity.user_email,
            activity_type: activity.activity_type,
            duration: activity.duration,
            calories: activity.calories,
            date: activity.date,
            created_at: activity.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub id: String,
    pub user_email: String,
    pub user_name: String,
    pub team: String,
    pub total_calories: i64,
    pub total_activities: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

impl From<LeaderboardEntry> for LeaderboardResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            user_email: entry.user_email,
            user_name: entry.user_name,
            team: entry.team,
            total_calories: entry.total_calories,
            total_activities: entry.total_activities,
            last_updated: entry.last_updated,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub activity_type: String,
    pub difficulty: Difficulty,
    pub estimated_duration: i32,
    pub estimated_calories: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id.to_string(),
            name: workout.name,
            description: workout.description,
            activity_type: workout.activity_type,
            difficulty: workout.difficulty,
            estimated_duration: workout.estimated_duration,
            estimated_calories: workout.estimated_calories,
            created_at: workout.created_at,
        }
    }
}

/// Links to every collection, served at the API root.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiRoot {
    pub users: String,
    pub teams: String,
    pub activities: String,
    pub leaderboard: String,
    pub workouts: String,
}

impl ApiRoot {
    /// Builds the links under `base`, which may be empty for relative links.
    pub fn under(base: &str) -> Self {
        let link = |collection: &str| format!("{base}/api/{collection}/");
        Self {
            users: link("users"),
            teams: link("teams"),
            activities: link("activities"),
            leaderboard: link("leaderboard"),
            workouts: link("workouts"),
        }
    }
}
