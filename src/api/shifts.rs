//! Shift plan endpoints

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use http::StatusCode;

use crate::db;
use crate::error::{AppError, AppResult, internal};
use crate::models::{Shift, ShiftCreate};
use crate::policy::{Action, Actor, Resource, authorize};
use crate::state::AppState;
use crate::util::{parse_datetime, require_text};

use super::ApiResult;

pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<Shift>> {
    authorize(&actor, Resource::Shift, Action::List, None)?;
    let shifts = db::shifts::list(&state.pool).await.map_err(internal)?;
    Ok(Json(shifts))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(data): Json<ShiftCreate>,
) -> ApiResult<Shift> {
    authorize(&actor, Resource::Shift, Action::Create, None)?;

    let employee = require_text("employee", &data.employee)?;
    let start = parse_datetime("start", &data.start)?;
    let end = parse_datetime("end", &data.end)?;
    if end < start {
        return Err(AppError::validation("end must not be before start"));
    }

    let shift = db::shifts::create(&state.pool, &employee, &data.role, start, end)
        .await
        .map_err(internal)?;
    Ok(Json(shift))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    authorize(&actor, Resource::Shift, Action::Delete, None)?;
    if !db::shifts::delete(&state.pool, id).await.map_err(internal)? {
        return Err(AppError::not_found("shift"));
    }
    Ok(StatusCode::NO_CONTENT)
}
