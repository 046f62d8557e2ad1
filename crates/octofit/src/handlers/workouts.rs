//! Workout suggestion handlers.

use axum::{Extension, extract::Path, http::StatusCode, response::Json};
use axum_extra::extract::WithRejection;

use super::{parse_id, validate_payload};
use crate::{
    errors::AppError,
    models::NewWorkout,
    store::{RecordKind, Store},
    types::WorkoutResponse,
};

/// List all workout suggestions.
#[utoipa::path(
    get,
    path = "/api/workouts/",
    tag = "workouts",
    responses(
        (status = 200, description = "All workouts", body = Vec<WorkoutResponse>)
    )
)]
pub async fn list_workouts(
    Extension(store): Extension<Store>,
) -> Result<Json<Vec<WorkoutResponse>>, AppError> {
    let workouts = store.list_workouts().await?;
    Ok(Json(workouts.into_iter().map(WorkoutResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}/",
    tag = "workouts",
    params(("id" = String, Path, description = "Workout ID")),
    responses(
        (status = 200, description = "Workout found", body = WorkoutResponse),
        (status = 404, description = "Workout not found")
    )
)]
pub async fn get_workout(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<Json<WorkoutResponse>, AppError> {
    let workout = store
        .get_workout(parse_id(&id)?)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(workout.into()))
}

#[utoipa::path(
    post,
    path = "/api/workouts/",
    tag = "workouts",
    request_body = NewWorkout,
    responses(
        (status = 201, description = "Workout created", body = WorkoutResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_workout(
    Extension(store): Extension<Store>,
    WithRejection(Json(req), _): WithRejection<Json<NewWorkout>, AppError>,
) -> Result<(StatusCode, Json<WorkoutResponse>), AppError> {
    validate_payload(&req)?;
    let workout = store.create_workout(&req).await?;
    Ok((StatusCode::CREATED, Json(workout.into())))
}

#[utoipa::path(
    put,
    path = "/api/workouts/{id}/",
    tag = "workouts",
    params(("id" = String, Path, description = "Workout ID")),
    request_body = NewWorkout,
    responses(
        (status = 200, description = "Workout updated", body = WorkoutResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Workout not found")
    )
)]
pub async fn update_workout(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<NewWorkout>, AppError>,
) -> Result<Json<WorkoutResponse>, AppError> {
    let id = parse_id(&id)?;
    validate_payload(&req)?;
    let workout = store
        .update_workout(id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(workout.into()))
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}/",
    tag = "workouts",
    params(("id" = String, Path, description = "Workout ID")),
    responses(
        (status = 204, description = "Workout deleted"),
        (status = 404, description = "Workout not found")
    )
)]
pub async fn delete_workout(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if store.delete(RecordKind::Workout, parse_id(&id)?).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
