//! Worked-hours endpoints.
//!
//! The only resource with per-record ownership rules: waiters file, see,
//! and delete their own entries; leads and managers handle anyone's.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use http::StatusCode;

use crate::db;
use crate::error::{AppError, AppResult, internal};
use crate::models::{Role, TimeEntry, TimeEntryCreate};
use crate::policy::{Action, Actor, Resource, authorize};
use crate::state::AppState;
use crate::util::parse_datetime;

use super::{ApiResult, unknown_user_or_internal};

pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<TimeEntry>> {
    authorize(&actor, Resource::TimeEntry, Action::List, None)?;
    let data = match actor.role {
        Role::Waiter => db::hours::list_for_user(&state.pool, actor.id).await,
        Role::ShiftLead | Role::Manager => db::hours::list_all(&state.pool).await,
    }
    .map_err(internal)?;
    Ok(Json(data))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(data): Json<TimeEntryCreate>,
) -> ApiResult<TimeEntry> {
    authorize(&actor, Resource::TimeEntry, Action::Create, Some(data.user_id))?;

    let start = parse_datetime("start", &data.start)?;
    let end = parse_datetime("end", &data.end)?;

    // The user reference is enforced by the foreign key, so there is no
    // window between a lookup and the insert.
    let entry = db::hours::create(&state.pool, data.user_id, start, end, &data.note)
        .await
        .map_err(unknown_user_or_internal)?;
    Ok(Json(entry))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let entry = db::hours::find(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("time entry"))?;

    authorize(&actor, Resource::TimeEntry, Action::Delete, Some(entry.user_id))?;

    db::hours::delete(&state.pool, id).await.map_err(internal)?;
    Ok(StatusCode::NO_CONTENT)
}
