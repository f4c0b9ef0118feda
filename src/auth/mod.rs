//! Session authentication for the API.
//!
//! Bearer tokens are opaque uuids stored in the `sessions` table. The
//! middleware resolves the token to an [`Actor`] and injects it as a request
//! extension; handlers therefore always receive the acting user explicitly.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::db;
use crate::error::{AppError, ErrorCode};
use crate::policy::Actor;
use crate::state::AppState;

/// The bearer token presented by the client, kept available to `logout`
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Middleware guarding every route behind a valid session
pub async fn session_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::new(ErrorCode::NotAuthenticated))?;

    // Owned copy, so the header borrow ends before the request is mutated.
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::new(ErrorCode::NotAuthenticated))?
        .to_string();

    let session = db::sessions::find(&state.pool, &token)
        .await
        .map_err(crate::error::internal)?
        .ok_or_else(|| AppError::new(ErrorCode::NotAuthenticated))?;

    if session.expires_at < chrono::Utc::now().naive_utc() {
        // Stale row; drop it so the table does not accumulate garbage.
        let _ = db::sessions::delete(&state.pool, &token).await;
        return Err(AppError::new(ErrorCode::SessionExpired));
    }

    let actor = Actor {
        id: session.user_id,
        username: session.username,
        role: session.role,
    };
    tracing::debug!(user = %actor.username, role = ?actor.role, "authenticated request");

    request.extensions_mut().insert(actor);
    request.extensions_mut().insert(SessionToken(token));

    Ok(next.run(request).await)
}
