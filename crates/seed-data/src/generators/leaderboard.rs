//! Leaderboard totals derived from stored activities.

use octofit::models::{Activity, NewLeaderboardEntry, User};

/// Calorie and activity totals for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaderboardTotals {
    pub total_calories: i64,
    pub total_activities: i32,
}

impl LeaderboardTotals {
    pub fn from_activities(activities: &[Activity]) -> Self {
        activities.iter().fold(Self::default(), |totals, activity| Self {
            total_calories: totals.total_calories + i64::from(activity.calories),
            total_activities: totals.total_activities + 1,
        })
    }
}

/// Builds the leaderboard row for `user` from their activities.
pub fn leaderboard_entry(user: &User, activities: &[Activity]) -> NewLeaderboardEntry {
    let totals = LeaderboardTotals::from_activities(activities);
    NewLeaderboardEntry {
        user_email: user.email.clone(),
        user_name: user.name.clone(),
        team: user.team.clone(),
        total_calories: totals.total_calories,
        total_activities: totals.total_activities,
    }
}
