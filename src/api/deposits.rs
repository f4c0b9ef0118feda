//! Clothing deposit endpoints (manager only)

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use http::StatusCode;

use crate::db;
use crate::error::{AppError, AppResult, internal};
use crate::models::{ClothingDeposit, ClothingDepositCreate};
use crate::policy::{Action, Actor, Resource, authorize};
use crate::state::AppState;
use crate::util::{parse_date, require_text};

use super::{ApiResult, unknown_user_or_internal};

pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<ClothingDeposit>> {
    authorize(&actor, Resource::Deposit, Action::List, None)?;
    let data = db::deposits::list(&state.pool).await.map_err(internal)?;
    Ok(Json(data))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(data): Json<ClothingDepositCreate>,
) -> ApiResult<ClothingDeposit> {
    authorize(&actor, Resource::Deposit, Action::Create, Some(data.user_id))?;

    let item = require_text("item", &data.item)?;
    let amount = data.amount.unwrap_or(0.0);
    let date = match &data.date {
        Some(s) if !s.trim().is_empty() => parse_date("date", s)?,
        _ => chrono::Utc::now().date_naive(),
    };

    let deposit = db::deposits::create(
        &state.pool,
        data.user_id,
        &item,
        &data.size,
        amount,
        date,
        data.returned,
        &data.notes,
    )
    .await
    .map_err(unknown_user_or_internal)?;
    Ok(Json(deposit))
}

pub async fn toggle(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> ApiResult<ClothingDeposit> {
    authorize(&actor, Resource::Deposit, Action::Toggle, None)?;
    let deposit = db::deposits::toggle_returned(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("deposit"))?;
    Ok(Json(deposit))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    authorize(&actor, Resource::Deposit, Action::Delete, None)?;
    if !db::deposits::delete(&state.pool, id).await.map_err(internal)? {
        return Err(AppError::not_found("deposit"));
    }
    Ok(StatusCode::NO_CONTENT)
}
