//! Authentication endpoints: login, logout

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::SessionToken;
use crate::db;
use crate::error::{AppError, ErrorCode, internal};
use crate::models::User;
use crate::state::AppState;
use crate::util::verify_password;

use super::ApiResult;

/// POST /api/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    // Unknown username and wrong password produce the same answer, so the
    // response does not reveal which usernames exist.
    let user = db::users::find_by_username(&state.pool, req.username.trim())
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::InvalidCredentials))?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(AppError::new(ErrorCode::InvalidCredentials));
    }

    let token = db::sessions::create(&state.pool, user.id)
        .await
        .map_err(internal)?;

    tracing::info!(user = %user.username, "login");
    Ok(Json(LoginResponse { token, user }))
}

/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> ApiResult<serde_json::Value> {
    db::sessions::delete(&state.pool, &token.0)
        .await
        .map_err(internal)?;
    Ok(Json(serde_json::json!({ "message": "logged out" })))
}
