//! HTTP request handlers for the OctoFit API.
//!
//! One submodule per collection, plus the API root and health check.

pub mod activities;
pub mod leaderboard;
pub mod root;
pub mod teams;
pub mod users;
pub mod workouts;

use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;

pub use activities::{
    create_activity, delete_activity, get_activity, list_activities, update_activity,
};
pub use leaderboard::{
    create_leaderboard_entry, delete_leaderboard_entry, get_leaderboard_entry, list_leaderboard,
    update_leaderboard_entry,
};
pub use root::{api_root, health_check, openapi_json};
pub use teams::{create_team, delete_team, get_team, list_teams, update_team};
pub use users::{create_user, delete_user, get_user, list_users, update_user};
pub use workouts::{create_workout, delete_workout, get_workout, list_workouts, update_workout};

/// Parses a path identifier. Anything that is not a UUID cannot name a
/// record, so it is reported as missing rather than malformed.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

pub(crate) fn validate_payload(payload: &impl Validate) -> Result<(), AppError> {
    payload.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_rejects_garbage_as_not_found() {
        assert!(matches!(parse_id("not-a-uuid"), Err(AppError::NotFound)));
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
