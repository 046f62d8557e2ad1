use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    Activity, LeaderboardEntry, NewActivity, NewLeaderboardEntry, NewTeam, NewUser, NewWorkout,
    Team, User, Workout,
};
use crate::store::{RecordKind, RecordStore};

const TEAM_COLUMNS: &str = "id, name, description, created_at";
const USER_COLUMNS: &str = "id, name, email, team, created_at";
const ACTIVITY_COLUMNS: &str =
    "id, user_email, activity_type, duration, calories, date, created_at";
const LEADERBOARD_COLUMNS: &str =
    "id, user_email, user_name, team, total_calories, total_activities, last_updated";
const WORKOUT_COLUMNS: &str = "id, name, description, activity_type, difficulty, \
     estimated_duration, estimated_calories, created_at";

/// Connects to PostgreSQL and brings the schema up to date.
pub async fn connect(database_url: &str) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// PostgreSQL-backed record store.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for Database {
    async fn delete_all(&self, kind: RecordKind) -> Result<u64, AppError> {
        let result = sqlx::query(&format!("DELETE FROM {}", kind.table()))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self, kind: RecordKind) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", kind.table()))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn delete(&self, kind: RecordKind, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", kind.table()))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_team(&self, team: &NewTeam) -> Result<Team, AppError> {
        let team = sqlx::query_as(&format!(
            r#"
            INSERT INTO teams (id, name, description, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {TEAM_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&team.name)
        .bind(&team.description)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(team)
    }

    async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        let teams = sqlx::query_as(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    async fn get_team(&self, id: Uuid) -> Result<Option<Team>, AppError> {
        let team = sqlx::query_as(&format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(team)
    }

    async fn update_team(&self, id: Uuid, team: &NewTeam) -> Result<Option<Team>, AppError> {
        let team = sqlx::query_as(&format!(
            r#"
            UPDATE teams SET name = $2, description = $3
            WHERE id = $1
            RETURNING {TEAM_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&team.name)
        .bind(&team.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (id, name, email, team, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.team)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn update_user(&self, id: Uuid, user: &NewUser) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as(&format!(
            r#"
            UPDATE users SET name = $2, email = $3, team = $4
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.team)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_activity(&self, activity: &NewActivity) -> Result<Activity, AppError> {
        let activity = sqlx::query_as(&format!(
            r#"
            INSERT INTO activities (id, user_email, activity_type, duration, calories, date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ACTIVITY_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&activity.user_email)
        .bind(&activity.activity_type)
        .bind(activity.duration)
        .bind(activity.calories)
        .bind(activity.date)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(activity)
    }

    async fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        let activities = sqlx::query_as(&format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }

    async fn get_activity(&self, id: Uuid) -> Result<Option<Activity>, AppError> {
        let activity = sqlx::query_as(&format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(activity)
    }

    async fn update_activity(
        &self,
        id: Uuid,
        activity: &NewActivity,
    ) -> Result<Option<Activity>, AppError> {
        let activity = sqlx::query_as(&format!(
            r#"
            UPDATE activities
            SET user_email = $2, activity_type = $3, duration = $4, calories = $5, date = $6
            WHERE id = $1
            RETURNING {ACTIVITY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&activity.user_email)
        .bind(&activity.activity_type)
        .bind(activity.duration)
        .bind(activity.calories)
        .bind(activity.date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(activity)
    }

    async fn activities_for_user(&self, email: &str) -> Result<Vec<Activity>, AppError> {
        let activities = sqlx::query_as(&format!(
            r#"
            SELECT {ACTIVITY_COLUMNS}
            FROM activities
            WHERE user_email = $1
            ORDER BY created_at, id
            "#
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }

    async fn create_leaderboard_entry(
        &self,
        entry: &NewLeaderboardEntry,
    ) -> Result<LeaderboardEntry, AppError> {
        let entry = sqlx::query_as(&format!(
            r#"
            INSERT INTO leaderboard (id, user_email, user_name, team,
                                     total_calories, total_activities, last_updated, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING {LEADERBOARD_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&entry.user_email)
        .bind(&entry.user_name)
        .bind(&entry.team)
        .bind(entry.total_calories)
        .bind(entry.total_activities)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn list_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        let entries = sqlx::query_as(&format!(
            r#"
            SELECT {LEADERBOARD_COLUMNS}
            FROM leaderboard
            ORDER BY total_calories DESC, created_at, id
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn get_leaderboard_entry(
        &self,
        id: Uuid,
    ) -> Result<Option<LeaderboardEntry>, AppError> {
        let entry = sqlx::query_as(&format!(
            "SELECT {LEADERBOARD_COLUMNS} FROM leaderboard WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn update_leaderboard_entry(
        &self,
        id: Uuid,
        entry: &NewLeaderboardEntry,
    ) -> Result<Option<LeaderboardEntry>, AppError> {
        let entry = sqlx::query_as(&format!(
            r#"
            UPDATE leaderboard
            SET user_email = $2, user_name = $3, team = $4,
                total_calories = $5, total_activities = $6, last_updated = $7
            WHERE id = $1
            RETURNING {LEADERBOARD_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&entry.user_email)
        .bind(&entry.user_name)
        .bind(&entry.team)
        .bind(entry.total_calories)
        .bind(entry.total_activities)
        .bind(OffsetDateTime::now_utc())
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn create_workout(&self, workout: &NewWorkout) -> Result<Workout, AppError> {
        let workout = sqlx::query_as(&format!(
            r#"
            INSERT INTO workouts (id, name, description, activity_type, difficulty,
                                  estimated_duration, estimated_calories, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&workout.name)
        .bind(&workout.description)
        .bind(&workout.activity_type)
        .bind(workout.difficulty)
        .bind(workout.estimated_duration)
        .bind(workout.estimated_calories)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(workout)
    }

    async fn list_workouts(&self) -> Result<Vec<Workout>, AppError> {
        let workouts = sqlx::query_as(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(workouts)
    }

    async fn get_workout(&self, id: Uuid) -> Result<Option<Workout>, AppError> {
        let workout = sqlx::query_as(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(workout)
    }

    async fn update_workout(
        &self,
        id: Uuid,
        workout: &NewWorkout,
    ) -> Result<Option<Workout>, AppError> {
        let workout = sqlx::query_as(&format!(
            r#"
            UPDATE workouts
            SET name = $2, description = $3, activity_type = $4, difficulty = $5,
                estimated_duration = $6, estimated_calories = $7
            WHERE id = $1
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&workout.name)
        .bind(&workout.description)
        .bind(&workout.activity_type)
        .bind(workout.difficulty)
        .bind(workout.estimated_duration)
        .bind(workout.estimated_calories)
        .fetch_optional(&self.pool)
        .await?;

        Ok(workout)
    }
}
