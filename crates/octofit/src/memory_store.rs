//! In-process record store.
//!
//! Keeps every table in a `Vec` behind a single async lock, so each call sees
//! and leaves a consistent state. Used by the test suites and anywhere a
//! PostgreSQL instance is not wanted.

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    Activity, LeaderboardEntry, NewActivity, NewLeaderboardEntry, NewTeam, NewUser, NewWorkout,
    Team, User, Workout,
};
use crate::store::{RecordKind, RecordStore};

trait Keyed {
    fn key(&self) -> Uuid;
}

macro_rules! keyed {
    ($($record:ty),*) => {
        $(impl Keyed for $record {
            fn key(&self) -> Uuid {
                self.id
            }
        })*
    };
}

keyed!(Team, User, Activity, LeaderboardEntry, Workout);

fn find<T: Keyed + Clone>(rows: &[T], id: Uuid) -> Option<T> {
    rows.iter().find(|row| row.key() == id).cloned()
}

fn find_mut<T: Keyed>(rows: &mut [T], id: Uuid) -> Option<&mut T> {
    rows.iter_mut().find(|row| row.key() == id)
}

fn remove<T: Keyed>(rows: &mut Vec<T>, id: Uuid) -> bool {
    let before = rows.len();
    rows.retain(|row| row.key() != id);
    rows.len() != before
}

#[derive(Default)]
struct Tables {
    teams: Vec<Team>,
    users: Vec<User>,
    activities: Vec<Activity>,
    leaderboard: Vec<LeaderboardEntry>,
    workouts: Vec<Workout>,
}

impl Tables {
    fn len(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Team => self.teams.len(),
            RecordKind::User => self.users.len(),
            RecordKind::Activity => self.activities.len(),
            RecordKind::Leaderboard => self.leaderboard.len(),
            RecordKind::Workout => self.workouts.len(),
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn delete_all(&self, kind: RecordKind) -> Result<u64, AppError> {
        let mut tables = self.tables.write().await;
        let removed = tables.len(kind) as u64;
        match kind {
            RecordKind::Team => tables.teams.clear(),
            RecordKind::User => tables.users.clear(),
            RecordKind::Activity => tables.activities.clear(),
            RecordKind::Leaderboard => tables.leaderboard.clear(),
            RecordKind::Workout => tables.workouts.clear(),
        }
        Ok(removed)
    }

    async fn count(&self, kind: RecordKind) -> Result<i64, AppError> {
        Ok(self.tables.read().await.len(kind) as i64)
    }

    async fn delete(&self, kind: RecordKind, id: Uuid) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        let removed = match kind {
            RecordKind::Team => remove(&mut tables.teams, id),
            RecordKind::User => remove(&mut tables.users, id),
            RecordKind::Activity => remove(&mut tables.activities, id),
            RecordKind::Leaderboard => remove(&mut tables.leaderboard, id),
            RecordKind::Workout => remove(&mut tables.workouts, id),
        };
        Ok(removed)
    }

    async fn create_team(&self, team: &NewTeam) -> Result<Team, AppError> {
        let team = Team {
            id: Uuid::new_v4(),
            name: team.name.clone(),
            description: team.description.clone(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.tables.write().await.teams.push(team.clone());
        Ok(team)
    }

    async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        Ok(self.tables.read().await.teams.clone())
    }

    async fn get_team(&self, id: Uuid) -> Result<Option<Team>, AppError> {
        Ok(find(&self.tables.read().await.teams, id))
    }

    async fn update_team(&self, id: Uuid, team: &NewTeam) -> Result<Option<Team>, AppError> {
        let mut tables = self.tables.write().await;
        Ok(find_mut(&mut tables.teams, id).map(|row| {
            row.name = team.name.clone();
            row.description = team.description.clone();
            row.clone()
        }))
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, AppError> {
        let user = User {
            id: Uuid::new_v4(),
            name: user.name.clone(),
            email: user.email.clone(),
            team: user.team.clone(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.tables.write().await.users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(find(&self.tables.read().await.users, id))
    }

    async fn update_user(&self, id: Uuid, user: &NewUser) -> Result<Option<User>, AppError> {
        let mut tables = self.tables.write().await;
        Ok(find_mut(&mut tables.users, id).map(|row| {
            row.name = user.name.clone();
            row.email = user.email.clone();
            row.team = user.team.clone();
            row.clone()
        }))
    }

    async fn create_activity(&self, activity: &NewActivity) -> Result<Activity, AppError> {
        let activity = Activity {
            id: Uuid::new_v4(),
            user_email: activity.user_email.clone(),
            activity_type: activity.activity_type.clone(),
            duration: activity.duration,
            calories: activity.calories,
            date: activity.date,
            created_at: OffsetDateTime::now_utc(),
        };
        self.tables.write().await.activities.push(activity.clone());
        Ok(activity)
    }

    async fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        Ok(self.tables.read().await.activities.clone())
    }

    async fn get_activity(&self, id: Uuid) -> Result<Option<Activity>, AppError> {
        Ok(find(&self.tables.read().await.activities, id))
    }

    async fn update_activity(
        &self,
        id: Uuid,
        activity: &NewActivity,
    ) -> Result<Option<Activity>, AppError> {
        let mut tables = self.tables.write().await;
        Ok(find_mut(&mut tables.activities, id).map(|row| {
            row.user_email = activity.user_email.clone();
            row.activity_type = activity.activity_type.clone();
            row.duration = activity.duration;
            row.calories = activity.calories;
            row.date = activity.date;
            row.clone()
        }))
    }

    async fn activities_for_user(&self, email: &str) -> Result<Vec<Activity>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .activities
            .iter()
            .filter(|a| a.user_email == email)
            .cloned()
            .collect())
    }

    async fn create_leaderboard_entry(
        &self,
        entry: &NewLeaderboardEntry,
    ) -> Result<LeaderboardEntry, AppError> {
        let entry = LeaderboardEntry {
            id: Uuid::new_v4(),
            user_email: entry.user_email.clone(),
            user_name: entry.user_name.clone(),
            team: entry.team.clone(),
            total_calories: entry.total_calories,
            total_activities: entry.total_activities,
            last_updated: OffsetDateTime::now_utc(),
        };
        self.tables.write().await.leaderboard.push(entry.clone());
        Ok(entry)
    }

    async fn list_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        let mut entries = self.tables.read().await.leaderboard.clone();
        // Stable sort keeps insertion order between equal totals.
        entries.sort_by(|a, b| b.total_calories.cmp(&a.total_calories));
        Ok(entries)
    }

    async fn get_leaderboard_entry(
        &self,
        id: Uuid,
    ) -> Result<Option<LeaderboardEntry>, AppError> {
        Ok(find(&self.tables.read().await.leaderboard, id))
    }

    async fn update_leaderboard_entry(
        &self,
        id: Uuid,
        entry: &NewLeaderboardEntry,
    ) -> Result<Option<LeaderboardEntry>, AppError> {
        let mut tables = self.tables.write().await;
        Ok(find_mut(&mut tables.leaderboard, id).map(|row| {
            row.user_email = entry.user_email.clone();
            row.user_name = entry.user_name.clone();
            row.team = entry.team.clone();
            row.total_calories = entry.total_calories;
            row.total_activities = entry.total_activities;
            row.last_updated = OffsetDateTime::now_utc();
            row.clone()
        }))
    }

    async fn create_workout(&self, workout: &NewWorkout) -> Result<Workout, AppError> {
        let workout = Workout {
            id: Uuid::new_v4(),
            name: workout.name.clone(),
            description: workout.description.clone(),
            activity_type: workout.activity_type.clone(),
            difficulty: workout.difficulty,
            estimated_duration: workout.estimated_duration,
            estimated_calories: workout.estimated_calories,
            created_at: OffsetDateTime::now_utc(),
        };
        self.tables.write().await.workouts.push(workout.clone());
        Ok(workout)
    }

    async fn list_workouts(&self) -> Result<Vec<Workout>, AppError> {
        Ok(self.tables.read().await.workouts.clone())
    }

    async fn get_workout(&self, id: Uuid) -> Result<Option<Workout>, AppError> {
        Ok(find(&self.tables.read().await.workouts, id))
    }

    async fn update_workout(
        &self,
        id: Uuid,
        workout: &NewWorkout,
    ) -> Result<Option<Workout>, AppError> {
        let mut tables = self.tables.write().await;
        Ok(find_mut(&mut tables.workouts, id).map(|row| {
            row.name = workout.name.clone();
            row.description = workout.description.clone();
            row.activity_type = workout.activity_type.clone();
            row.difficulty = workout.difficulty;
            row.estimated_duration = workout.estimated_duration;
            row.estimated_calories = workout.estimated_calories;
            row.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn run(email: &str, calories: i32) -> NewActivity {
        NewActivity {
            user_email: email.to_string(),
            activity_type: "Running".to_string(),
            duration: 30,
            calories,
            date: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = MemoryStore::new();
        let team = NewTeam {
            name: "Team Marvel".to_string(),
            description: String::new(),
        };

        let first = store.create_team(&team).await.unwrap();
        let second = store.create_team(&team).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.count(RecordKind::Team).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_activities_for_user_filters_by_email() {
        let store = MemoryStore::new();
        store.create_activity(&run("thor@asgard.com", 300)).await.unwrap();
        store.create_activity(&run("hulk@avengers.com", 150)).await.unwrap();
        store.create_activity(&run("thor@asgard.com", 200)).await.unwrap();

        let thor = store.activities_for_user("thor@asgard.com").await.unwrap();

        assert_eq!(thor.len(), 2);
        assert!(thor.iter().all(|a| a.user_email == "thor@asgard.com"));
        assert!(store.activities_for_user("nobody@example.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_all_only_touches_one_kind() {
        let store = MemoryStore::new();
        store.create_activity(&run("thor@asgard.com", 300)).await.unwrap();
        store
            .create_workout(&NewWorkout {
                name: "Flash Speed Run".to_string(),
                description: String::new(),
                activity_type: "Running".to_string(),
                difficulty: Difficulty::Hard,
                estimated_duration: 30,
                estimated_calories: 350,
            })
            .await
            .unwrap();

        let removed = store.delete_all(RecordKind::Activity).await.unwrap();

        assert_eq!(removed, 1);
        assert_eq!(store.count(RecordKind::Activity).await.unwrap(), 0);
        assert_eq!(store.count(RecordKind::Workout).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let store = MemoryStore::new();
        let created = store.create_activity(&run("thor@asgard.com", 300)).await.unwrap();

        let updated = store
            .update_activity(created.id, &run("thor@asgard.com", 450))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.calories, 450);
        assert!(store.update_activity(Uuid::new_v4(), &run("x@y.z", 1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_leaderboard_lists_highest_total_first() {
        let store = MemoryStore::new();
        for (email, total) in [("a@x.com", 100), ("b@x.com", 900), ("c@x.com", 500)] {
            store
                .create_leaderboard_entry(&NewLeaderboardEntry {
                    user_email: email.to_string(),
                    user_name: email.to_string(),
                    team: "Team DC".to_string(),
                    total_calories: total,
                    total_activities: 1,
                })
                .await
                .unwrap();
        }

        let totals: Vec<i64> = store
            .list_leaderboard()
            .await
            .unwrap()
            .iter()
            .map(|e| e.total_calories)
            .collect();

        assert_eq!(totals, vec![900, 500, 100]);
    }

    #[tokio::test]
    async fn test_delete_reports_missing_records() {
        let store = MemoryStore::new();
        let user = store
            .create_user(&NewUser {
                name: "Bruce Wayne".to_string(),
                email: "batman@justiceleague.com".to_string(),
                team: "Team DC".to_string(),
            })
            .await
            .unwrap();

        assert!(store.delete(RecordKind::User, user.id).await.unwrap());
        assert!(!store.delete(RecordKind::User, user.id).await.unwrap());
        assert!(store.get_user(user.id).await.unwrap().is_none());
    }
}
