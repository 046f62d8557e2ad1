//! Stored records and the field sets used to create or replace them.
//!
//! Relations between records are soft references: a user's `team` is a copy
//! of the team's name and activities point at their user by `user_email`.
//! Renaming a team or changing an email does not propagate.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Name of the team at the time the user was written.
    pub team: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Activity {
    pub id: Uuid,
    pub user_email: String,
    pub activity_type: String,
    /// Minutes.
    pub duration: i32,
    pub calories: i32,
    pub date: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

/// Per-user totals captured when the row was written.
///
/// Nothing recomputes these when activities change afterwards.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub user_email: String,
    pub user_name: String,
    pub team: String,
    pub total_calories: i64,
    pub total_activities: i32,
    pub last_updated: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub activity_type: String,
    pub difficulty: Difficulty,
    /// Minutes.
    pub estimated_duration: i32,
    pub estimated_calories: i32,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "workout_difficulty")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct NewTeam {
    #[validate(length(min = 1, max = 100, message = "Team name must be between 1 and 100 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct NewUser {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Team is required"))]
    pub team: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct NewActivity {
    #[validate(email(message = "Invalid user email"))]
    pub user_email: String,
    #[validate(length(min = 1, message = "Activity type is required"))]
    pub activity_type: String,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: i32,
    #[validate(range(min = 1, message = "Calories must be positive"))]
    pub calories: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct NewLeaderboardEntry {
    #[validate(email(message = "Invalid user email"))]
    pub user_email: String,
    #[validate(length(min = 1, message = "User name is required"))]
    pub user_name: String,
    pub team: String,
    #[validate(range(min = 0, message = "Total calories cannot be negative"))]
    pub total_calories: i64,
    #[validate(range(min = 0, message = "Total activities cannot be negative"))]
    pub total_activities: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct NewWorkout {
    #[validate(length(min = 1, max = 100, message = "Workout name must be between 1 and 100 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "Activity type is required"))]
    pub activity_type: String,
    pub difficulty: Difficulty,
    #[validate(range(min = 1, message = "Estimated duration must be positive"))]
    pub estimated_duration: i32,
    #[validate(range(min = 1, message = "Estimated calories must be positive"))]
    pub estimated_calories: i32,
}
