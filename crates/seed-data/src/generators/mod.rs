//! Entity generators for sample data.
//!
//! - [`SQUADS`]: the two fixed teams and their hero rosters
//! - [`ActivityGenerator`]: random activities for a user
//! - [`leaderboard_entry`]: per-user totals over stored activities
//! - [`workout_catalog`]: the fixed workout suggestions

pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod workout;

pub use activity::ActivityGenerator;
pub use leaderboard::{LeaderboardTotals, leaderboard_entry};
pub use team::{Hero, SQUADS, Squad, TEAM_DC, TEAM_MARVEL, roster_size};
pub use workout::workout_catalog;
