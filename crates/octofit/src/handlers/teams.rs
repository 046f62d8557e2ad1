//! Team handlers.

use axum::{Extension, extract::Path, http::StatusCode, response::Json};
use axum_extra::extract::WithRejection;

use super::{parse_id, validate_payload};
use crate::{
    errors::AppError,
    models::NewTeam,
    store::{RecordKind, Store},
    types::TeamResponse,
};

/// List all teams.
#[utoipa::path(
    get,
    path = "/api/teams/",
    tag = "teams",
    responses(
        (status = 200, description = "All teams", body = Vec<TeamResponse>)
    )
)]
pub async fn list_teams(
    Extension(store): Extension<Store>,
) -> Result<Json<Vec<TeamResponse>>, AppError> {
    let teams = store.list_teams().await?;
    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

/// Get a single team.
#[utoipa::path(
    get,
    path = "/api/teams/{id}/",
    tag = "teams",
    params(("id" = String, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "Team not found")
    )
)]
pub async fn get_team(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<Json<TeamResponse>, AppError> {
    let team = store
        .get_team(parse_id(&id)?)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(team.into()))
}

/// Create a team.
#[utoipa::path(
    post,
    path = "/api/teams/",
    tag = "teams",
    request_body = NewTeam,
    responses(
        (status = 201, description = "Team created", body = TeamResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_team(
    Extension(store): Extension<Store>,
    WithRejection(Json(req), _): WithRejection<Json<NewTeam>, AppError>,
) -> Result<(StatusCode, Json<TeamResponse>), AppError> {
    validate_payload(&req)?;
    let team = store.create_team(&req).await?;
    Ok((StatusCode::CREATED, Json(team.into())))
}

/// Replace a team's fields.
///
/// Users keep the team name they were written with.
#[utoipa::path(
    put,
    path = "/api/teams/{id}/",
    tag = "teams",
    params(("id" = String, Path, description = "Team ID")),
    request_body = NewTeam,
    responses(
        (status = 200, description = "Team updated", body = TeamResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Team not found")
    )
)]
pub async fn update_team(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<NewTeam>, AppError>,
) -> Result<Json<TeamResponse>, AppError> {
    let id = parse_id(&id)?;
    validate_payload(&req)?;
    let team = store
        .update_team(id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(team.into()))
}

/// Delete a team.
#[utoipa::path(
    delete,
    path = "/api/teams/{id}/",
    tag = "teams",
    params(("id" = String, Path, description = "Team ID")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Team not found")
    )
)]
pub async fn delete_team(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if store.delete(RecordKind::Team, parse_id(&id)?).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
