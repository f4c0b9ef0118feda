//! Reservation endpoints

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use http::StatusCode;

use crate::db;
use crate::error::{AppError, AppResult, internal};
use crate::models::{Reservation, ReservationCreate};
use crate::policy::{Action, Actor, Resource, authorize};
use crate::state::AppState;
use crate::util::{parse_datetime, require_text};

use super::ApiResult;

const DEFAULT_PARTY_SIZE: i64 = 2;

pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<Reservation>> {
    authorize(&actor, Resource::Reservation, Action::List, None)?;
    let data = db::reservations::list(&state.pool).await.map_err(internal)?;
    Ok(Json(data))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(data): Json<ReservationCreate>,
) -> ApiResult<Reservation> {
    authorize(&actor, Resource::Reservation, Action::Create, None)?;

    let customer = require_text("customer", &data.customer)?;
    let size = data.size.unwrap_or(DEFAULT_PARTY_SIZE);
    let at = parse_datetime("at", &data.at)?;

    let reservation = db::reservations::create(&state.pool, &customer, size, at, &data.notes)
        .await
        .map_err(internal)?;
    Ok(Json(reservation))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    authorize(&actor, Resource::Reservation, Action::Delete, None)?;
    if !db::reservations::delete(&state.pool, id)
        .await
        .map_err(internal)?
    {
        return Err(AppError::not_found("reservation"));
    }
    Ok(StatusCode::NO_CONTENT)
}
