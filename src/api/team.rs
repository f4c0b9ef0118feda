//! Team directory, visible to every authenticated role

use axum::{Extension, Json, extract::State};

use crate::db;
use crate::error::internal;
use crate::models::User;
use crate::policy::{Action, Actor, Resource, authorize};
use crate::state::AppState;

use super::ApiResult;

pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<User>> {
    authorize(&actor, Resource::Team, Action::List, None)?;
    let people = db::users::list_team(&state.pool).await.map_err(internal)?;
    Ok(Json(people))
}
