//! Activity handlers.
//!
//! Writing activities here does not touch the leaderboard; its totals only
//! change when the seeder recomputes them.

use axum::{Extension, extract::Path, http::StatusCode, response::Json};
use axum_extra::extract::WithRejection;

use super::{parse_id, validate_payload};
use crate::{
    errors::AppError,
    models::NewActivity,
    store::{RecordKind, Store},
    types::ActivityResponse,
};

#[utoipa::path(
    get,
    path = "/api/activities/",
    tag = "activities",
    responses(
        (status = 200, description = "All activities", body = Vec<ActivityResponse>)
    )
)]
pub async fn list_activities(
    Extension(store): Extension<Store>,
) -> Result<Json<Vec<ActivityResponse>>, AppError> {
    let activities = store.list_activities().await?;
    Ok(Json(
        activities.into_iter().map(ActivityResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/activities/{id}/",
    tag = "activities",
    params(("id" = String, Path, description = "Activity ID")),
    responses(
        (status = 200, description = "Activity found", body = ActivityResponse),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn get_activity(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<Json<ActivityResponse>, AppError> {
    let activity = store
        .get_activity(parse_id(&id)?)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(activity.into()))
}

#[utoipa::path(
    post,
    path = "/api/activities/",
    tag = "activities",
    request_body = NewActivity,
    responses(
        (status = 201, description = "Activity logged", body = ActivityResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_activity(
    Extension(store): Extension<Store>,
    WithRejection(Json(req), _): WithRejection<Json<NewActivity>, AppError>,
) -> Result<(StatusCode, Json<ActivityResponse>), AppError> {
    validate_payload(&req)?;
    let activity = store.create_activity(&req).await?;
    Ok((StatusCode::CREATED, Json(activity.into())))
}

#[utoipa::path(
    put,
    path = "/api/activities/{id}/",
    tag = "activities",
    params(("id" = String, Path, description = "Activity ID")),
    request_body = NewActivity,
    responses(
        (status = 200, description = "Activity updated", body = ActivityResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn update_activity(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<NewActivity>, AppError>,
) -> Result<Json<ActivityResponse>, AppError> {
    let id = parse_id(&id)?;
    validate_payload(&req)?;
    let activity = store
        .update_activity(id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(activity.into()))
}

#[utoipa::path(
    delete,
    path = "/api/activities/{id}/",
    tag = "activities",
    params(("id" = String, Path, description = "Activity ID")),
    responses(
        (status = 204, description = "Activity deleted"),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn delete_activity(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if store.delete(RecordKind::Activity, parse_id(&id)?).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
