//! Sample data population for octofit.
//!
//! Wipes the tracker's five collections and fills them with two superhero
//! teams, twelve heroes, a few weeks of random activities, a leaderboard
//! computed from those activities and a fixed workout catalog.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::default().with_seed(12345);
//! let summary = Seeder::with_config(store, config.clone())
//!     .populate(&mut config.rng())
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ACTIVITY_TYPES, SeedConfig};
    pub use crate::db::{SeedError, SeedSummary, Seeder};
    pub use crate::generators::{
        ActivityGenerator, LeaderboardTotals, SQUADS, leaderboard_entry, workout_catalog,
    };
}
