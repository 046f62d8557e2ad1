//! PostgreSQL store tests.
//!
//! To run these tests, you need a PostgreSQL database and `DATABASE_URL` set.
//! Migrations are applied on connect.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p octofit --test postgres_store`
//!
//! The tests only touch records they create, so they can run against a
//! development database.

use std::env;

use octofit::database::{self, Database};
use octofit::models::{Difficulty, NewActivity, NewLeaderboardEntry, NewWorkout};
use octofit::store::{RecordKind, RecordStore};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Get a store, skipping tests if DATABASE_URL is not set.
async fn get_test_store() -> Option<Database> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match database::connect(&database_url).await {
        Ok(pool) => Some(Database::new(pool)),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

fn unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}

#[tokio::test]
async fn test_activities_for_user_filters_by_email() {
    let Some(db) = get_test_store().await else {
        return;
    };
    let email = unique_email();
    let now = OffsetDateTime::now_utc();

    let mut ids = Vec::new();
    for calories in [300, 450] {
        let activity = db
            .create_activity(&NewActivity {
                user_email: email.clone(),
                activity_type: "Running".to_string(),
                duration: 30,
                calories,
                date: now - Duration::days(2),
            })
            .await
            .expect("Failed to create activity");
        ids.push(activity.id);
    }

    let activities = db.activities_for_user(&email).await.unwrap();
    assert_eq!(activities.len(), 2);
    assert_eq!(activities.iter().map(|a| a.calories as i64).sum::<i64>(), 750);

    for id in ids {
        assert!(db.delete(RecordKind::Activity, id).await.unwrap());
    }
    assert!(db.activities_for_user(&email).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_refreshes_leaderboard_timestamp() {
    let Some(db) = get_test_store().await else {
        return;
    };
    let entry = NewLeaderboardEntry {
        user_email: unique_email(),
        user_name: "Test User".to_string(),
        team: "Test Team".to_string(),
        total_calories: 1000,
        total_activities: 10,
    };

    let created = db.create_leaderboard_entry(&entry).await.unwrap();
    let updated = db
        .update_leaderboard_entry(
            created.id,
            &NewLeaderboardEntry {
                total_calories: 1200,
                ..entry
            },
        )
        .await
        .unwrap()
        .expect("entry should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.total_calories, 1200);
    assert!(updated.last_updated >= created.last_updated);

    db.delete(RecordKind::Leaderboard, created.id).await.unwrap();
}

#[tokio::test]
async fn test_workout_difficulty_round_trips() {
    let Some(db) = get_test_store().await else {
        return;
    };

    let workout = db
        .create_workout(&NewWorkout {
            name: format!("Test Workout {}", Uuid::new_v4()),
            description: "A nice morning run".to_string(),
            activity_type: "Running".to_string(),
            difficulty: Difficulty::Medium,
            estimated_duration: 30,
            estimated_calories: 300,
        })
        .await
        .unwrap();

    let fetched = db.get_workout(workout.id).await.unwrap().unwrap();
    assert_eq!(fetched.difficulty, Difficulty::Medium);
    assert!(db.get_workout(Uuid::new_v4()).await.unwrap().is_none());

    db.delete(RecordKind::Workout, workout.id).await.unwrap();
}

#[tokio::test]
async fn test_count_sees_new_records() {
    let Some(db) = get_test_store().await else {
        return;
    };
    let before: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities")
        .fetch_one(db.pool())
        .await
        .unwrap();

    let activity = db
        .create_activity(&NewActivity {
            user_email: unique_email(),
            activity_type: "Yoga".to_string(),
            duration: 60,
            calories: 300,
            date: OffsetDateTime::now_utc(),
        })
        .await
        .unwrap();

    // Other tests may write concurrently, so only a lower bound holds.
    assert!(db.count(RecordKind::Activity).await.unwrap() >= before + 1);

    db.delete(RecordKind::Activity, activity.id).await.unwrap();
}

#[tokio::test]
async fn test_leaderboard_ties_keep_creation_order_after_update() {
    let Some(db) = get_test_store().await else {
        return;
    };
    // A total no other test writes, so only these rows tie.
    let total = 1_000_000_000 + (Uuid::new_v4().as_u128() % 1_000_000) as i64;
    let entry = |email: String| NewLeaderboardEntry {
        user_email: email,
        user_name: "Tied User".to_string(),
        team: "Test Team".to_string(),
        total_calories: total,
        total_activities: 3,
    };

    let first = db.create_leaderboard_entry(&entry(unique_email())).await.unwrap();
    let second = db.create_leaderboard_entry(&entry(unique_email())).await.unwrap();
    db.update_leaderboard_entry(first.id, &entry(first.user_email.clone()))
        .await
        .unwrap()
        .expect("entry should exist");

    let tied: Vec<Uuid> = db
        .list_leaderboard()
        .await
        .unwrap()
        .into_iter()
        .filter(|e| e.total_calories == total)
        .map(|e| e.id)
        .collect();
    assert_eq!(tied, vec![first.id, second.id]);

    db.delete(RecordKind::Leaderboard, first.id).await.unwrap();
    db.delete(RecordKind::Leaderboard, second.id).await.unwrap();
}
