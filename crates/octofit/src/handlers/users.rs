//! User handlers.

use axum::{Extension, extract::Path, http::StatusCode, response::Json};
use axum_extra::extract::WithRejection;

use super::{parse_id, validate_payload};
use crate::{
    errors::AppError,
    models::NewUser,
    store::{RecordKind, Store},
    types::UserResponse,
};

/// List all users.
#[utoipa::path(
    get,
    path = "/api/users/",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(
    Extension(store): Extension<Store>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = store.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a single user.
#[utoipa::path(
    get,
    path = "/api/users/{id}/",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = store
        .get_user(parse_id(&id)?)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(user.into()))
}

/// Create a user.
///
/// `team` is stored as given; it is not checked against existing teams.
#[utoipa::path(
    post,
    path = "/api/users/",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_user(
    Extension(store): Extension<Store>,
    WithRejection(Json(req), _): WithRejection<Json<NewUser>, AppError>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    validate_payload(&req)?;
    let user = store.create_user(&req).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Replace a user's fields.
#[utoipa::path(
    put,
    path = "/api/users/{id}/",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    request_body = NewUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<NewUser>, AppError>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id)?;
    validate_payload(&req)?;
    let user = store
        .update_user(id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(user.into()))
}

/// Delete a user. Their activities and leaderboard row are left in place.
#[utoipa::path(
    delete,
    path = "/api/users/{id}/",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if store.delete(RecordKind::User, parse_id(&id)?).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
