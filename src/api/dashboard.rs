//! Dashboard counts

use axum::{Extension, Json, extract::State};

use crate::db::{self, DashboardStats};
use crate::error::internal;
use crate::policy::{Action, Actor, Resource, authorize};
use crate::state::AppState;

use super::ApiResult;

pub async fn stats(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<DashboardStats> {
    authorize(&actor, Resource::Dashboard, Action::List, None)?;
    let stats = db::dashboard_stats(&state.pool).await.map_err(internal)?;
    Ok(Json(stats))
}
