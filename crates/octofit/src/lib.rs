pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod memory_store;
pub mod models;
pub mod request_id;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use sqlx::PgPool;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;

use crate::{
    database::Database,
    handlers::{
        api_root, create_activity, create_leaderboard_entry, create_team, create_user,
        create_workout, delete_activity, delete_leaderboard_entry, delete_team, delete_user,
        delete_workout, get_activity, get_leaderboard_entry, get_team, get_user, get_workout,
        health_check, list_activities, list_leaderboard, list_teams, list_users, list_workouts,
        openapi_json, update_activity, update_leaderboard_entry, update_team, update_user,
        update_workout,
    },
    request_id::request_id_middleware,
    store::Store,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "OctoFit Tracker API"),
    paths(
        handlers::root::health_check,
        handlers::root::api_root,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::create_user,
        handlers::users::update_user,
        handlers::users::delete_user,
        handlers::teams::list_teams,
        handlers::teams::get_team,
        handlers::teams::create_team,
        handlers::teams::update_team,
        handlers::teams::delete_team,
        handlers::activities::list_activities,
        handlers::activities::get_activity,
        handlers::activities::create_activity,
        handlers::activities::update_activity,
        handlers::activities::delete_activity,
        handlers::leaderboard::list_leaderboard,
        handlers::leaderboard::get_leaderboard_entry,
        handlers::leaderboard::create_leaderboard_entry,
        handlers::leaderboard::update_leaderboard_entry,
        handlers::leaderboard::delete_leaderboard_entry,
        handlers::workouts::list_workouts,
        handlers::workouts::get_workout,
        handlers::workouts::create_workout,
        handlers::workouts::update_workout,
        handlers::workouts::delete_workout,
    ),
    components(schemas(
        types::ApiRoot,
        types::UserResponse,
        types::TeamResponse,
        types::ActivityResponse,
        types::LeaderboardResponse,
        types::WorkoutResponse,
        models::NewUser,
        models::NewTeam,
        models::NewActivity,
        models::NewLeaderboardEntry,
        models::NewWorkout,
        models::Difficulty,
    ))
)]
pub struct ApiDoc;

pub fn create_router(store: Store) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/", get(api_root))
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/users/", get(list_users).post(create_user))
        .route(
            "/api/users/{id}/",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/teams/", get(list_teams).post(create_team))
        .route(
            "/api/teams/{id}/",
            get(get_team).put(update_team).delete(delete_team),
        )
        .route(
            "/api/activities/",
            get(list_activities).post(create_activity),
        )
        .route(
            "/api/activities/{id}/",
            get(get_activity)
                .put(update_activity)
                .delete(delete_activity),
        )
        .route(
            "/api/leaderboard/",
            get(list_leaderboard).post(create_leaderboard_entry),
        )
        .route(
            "/api/leaderboard/{id}/",
            get(get_leaderboard_entry)
                .put(update_leaderboard_entry)
                .delete(delete_leaderboard_entry),
        )
        .route("/api/workouts/", get(list_workouts).post(create_workout))
        .route(
            "/api/workouts/{id}/",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .layer(Extension(store))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub async fn run_server(pool: PgPool, port: u16) -> anyhow::Result<()> {
    let store: Store = Arc::new(Database::new(pool));
    let app = create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
