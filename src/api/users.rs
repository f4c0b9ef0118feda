//! User administration endpoints (manager only)

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use http::StatusCode;

use crate::db;
use crate::db::users::DeleteOutcome;
use crate::error::{AppError, AppResult, ErrorCode, internal};
use crate::models::{User, UserCreate};
use crate::policy::{Action, Actor, Resource, authorize};
use crate::state::AppState;
use crate::util::{hash_password, require_text};

use super::ApiResult;

pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<User>> {
    authorize(&actor, Resource::UserAccount, Action::List, None)?;
    let data = db::users::list(&state.pool).await.map_err(internal)?;
    Ok(Json(data))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(data): Json<UserCreate>,
) -> ApiResult<User> {
    authorize(&actor, Resource::UserAccount, Action::Create, None)?;

    let username = require_text("username", &data.username)?;
    if data.password.is_empty() {
        return Err(AppError::validation("password must not be empty"));
    }
    let hash =
        hash_password(&data.password).map_err(|e| internal(format!("password hash: {e}")))?;

    let user = db::users::create(&state.pool, &username, &data.full_name, data.role, &hash)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::with_message(ErrorCode::AlreadyExists, "username already taken")
            } else {
                internal(e)
            }
        })?;
    Ok(Json(user))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    authorize(&actor, Resource::UserAccount, Action::Delete, Some(id))?;

    match db::users::delete(&state.pool, id).await.map_err(internal)? {
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT),
        DeleteOutcome::NotFound => Err(AppError::not_found("user")),
        DeleteOutcome::InUse => Err(AppError::new(ErrorCode::UserInUse)),
    }
}
