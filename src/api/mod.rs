//! API routes for bistro-ops

pub mod auth;
pub mod dashboard;
pub mod deposits;
pub mod health;
pub mod hours;
pub mod reports;
pub mod reservations;
pub mod shifts;
pub mod team;
pub mod users;

use axum::routing::{delete, get, post};
use axum::{Json, Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::session_auth_middleware;
use crate::error::AppError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// A foreign-key violation on a user reference means the caller named a
/// user that does not exist; everything else stays opaque.
fn unknown_user_or_internal(e: sqlx::Error) -> AppError {
    if e.as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
    {
        AppError::validation("user_id does not reference an existing user")
    } else {
        crate::error::internal(e)
    }
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Everything behind a valid session
    let protected = Router::new()
        .route("/api/logout", post(auth::logout))
        .route("/api/dashboard", get(dashboard::stats))
        .route("/api/team", get(team::list))
        .route("/api/shifts", get(shifts::list).post(shifts::create))
        .route("/api/shifts/{id}", delete(shifts::remove))
        .route(
            "/api/reservations",
            get(reservations::list).post(reservations::create),
        )
        .route("/api/reservations/{id}", delete(reservations::remove))
        .route("/api/reports", get(reports::list).post(reports::create))
        .route("/api/reports/{id}", delete(reports::remove))
        .route("/api/hours", get(hours::list).post(hours::create))
        .route("/api/hours/{id}", delete(hours::remove))
        .route("/api/deposits", get(deposits::list).post(deposits::create))
        .route("/api/deposits/{id}", delete(deposits::remove))
        .route("/api/deposits/{id}/toggle", post(deposits::toggle))
        .route("/api/users", get(users::list).post(users::create))
        .route("/api/users/{id}", delete(users::remove))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/login", post(auth::login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
