//! Shift report endpoints

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use http::StatusCode;

use crate::db;
use crate::error::{AppError, AppResult, internal};
use crate::models::{ShiftReport, ShiftReportCreate};
use crate::policy::{Action, Actor, Resource, authorize};
use crate::state::AppState;
use crate::util::parse_date;

use super::ApiResult;

pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<ShiftReport>> {
    authorize(&actor, Resource::Report, Action::List, None)?;
    let data = db::reports::list(&state.pool).await.map_err(internal)?;
    Ok(Json(data))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(data): Json<ShiftReportCreate>,
) -> ApiResult<ShiftReport> {
    authorize(&actor, Resource::Report, Action::Create, None)?;

    let date = parse_date("date", &data.date)?;
    let revenue = data.revenue.unwrap_or(0.0);
    if revenue < 0.0 {
        return Err(AppError::validation("revenue must not be negative"));
    }

    // The lead on a report is always the user filing it.
    let report = db::reports::create(
        &state.pool,
        date,
        actor.id,
        revenue,
        &data.issues,
        &data.notes,
    )
    .await
    .map_err(internal)?;
    Ok(Json(report))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    authorize(&actor, Resource::Report, Action::Delete, None)?;
    if !db::reports::delete(&state.pool, id).await.map_err(internal)? {
        return Err(AppError::not_found("report"));
    }
    Ok(StatusCode::NO_CONTENT)
}
