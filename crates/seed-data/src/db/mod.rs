//! Store integration for seeding sample data.
//!
//! The [`Seeder`] wipes the five collections and repopulates them through any
//! [`octofit::store::RecordStore`], logging progress as it goes.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
