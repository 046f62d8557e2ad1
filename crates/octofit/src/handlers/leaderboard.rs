//! Leaderboard handlers.

use axum::{Extension, extract::Path, http::StatusCode, response::Json};
use axum_extra::extract::WithRejection;

use super::{parse_id, validate_payload};
use crate::{
    errors::AppError,
    models::NewLeaderboardEntry,
    store::{RecordKind, Store},
    types::LeaderboardResponse,
};

/// Get the leaderboard, highest calorie total first.
#[utoipa::path(
    get,
    path = "/api/leaderboard/",
    tag = "leaderboard",
    responses(
        (status = 200, description = "Leaderboard entries", body = Vec<LeaderboardResponse>)
    )
)]
pub async fn list_leaderboard(
    Extension(store): Extension<Store>,
) -> Result<Json<Vec<LeaderboardResponse>>, AppError> {
    let entries = store.list_leaderboard().await?;
    Ok(Json(
        entries.into_iter().map(LeaderboardResponse::from).collect(),
    ))
}

/// Get a single leaderboard entry.
#[utoipa::path(
    get,
    path = "/api/leaderboard/{id}/",
    tag = "leaderboard",
    params(("id" = String, Path, description = "Leaderboard entry ID")),
    responses(
        (status = 200, description = "Entry found", body = LeaderboardResponse),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn get_leaderboard_entry(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let entry = store
        .get_leaderboard_entry(parse_id(&id)?)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(entry.into()))
}

/// Create a leaderboard entry. Totals are taken as given.
#[utoipa::path(
    post,
    path = "/api/leaderboard/",
    tag = "leaderboard",
    request_body = NewLeaderboardEntry,
    responses(
        (status = 201, description = "Entry created", body = LeaderboardResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_leaderboard_entry(
    Extension(store): Extension<Store>,
    WithRejection(Json(req), _): WithRejection<Json<NewLeaderboardEntry>, AppError>,
) -> Result<(StatusCode, Json<LeaderboardResponse>), AppError> {
    validate_payload(&req)?;
    let entry = store.create_leaderboard_entry(&req).await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// Replace a leaderboard entry, refreshing `last_updated`.
#[utoipa::path(
    put,
    path = "/api/leaderboard/{id}/",
    tag = "leaderboard",
    params(("id" = String, Path, description = "Leaderboard entry ID")),
    request_body = NewLeaderboardEntry,
    responses(
        (status = 200, description = "Entry updated", body = LeaderboardResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn update_leaderboard_entry(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<NewLeaderboardEntry>, AppError>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let id = parse_id(&id)?;
    validate_payload(&req)?;
    let entry = store
        .update_leaderboard_entry(id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(entry.into()))
}

/// Delete a leaderboard entry.
#[utoipa::path(
    delete,
    path = "/api/leaderboard/{id}/",
    tag = "leaderboard",
    params(("id" = String, Path, description = "Leaderboard entry ID")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn delete_leaderboard_entry(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if store.delete(RecordKind::Leaderboard, parse_id(&id)?).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
