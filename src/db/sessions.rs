//! Session token storage
//!
//! Opaque uuid tokens bound to a user id, revoked by row deletion. Expired
//! rows are removed by the auth middleware when it encounters them.

use chrono::{Duration, NaiveDateTime, Utc};
use sqlx::SqlitePool;

use crate::models::Role;

const SESSION_TTL_HOURS: i64 = 24;

/// A session row joined with its user, as seen by the auth middleware
#[derive(Debug, sqlx::FromRow)]
pub struct SessionUser {
    pub expires_at: NaiveDateTime,
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

/// Create a session for a user and return the bearer token
pub async fn create(pool: &SqlitePool, user_id: i64) -> Result<String, sqlx::Error> {
    let token = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc();
    let expires_at = now + Duration::hours(SESSION_TTL_HOURS);

    sqlx::query("INSERT INTO sessions (token, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)")
        .bind(&token)
        .bind(user_id)
        .bind(now)
        .bind(expires_at)
        .execute(pool)
        .await?;

    Ok(token)
}

/// Resolve a token to its session and user, if any
pub async fn find(pool: &SqlitePool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT s.expires_at, u.id AS user_id, u.username, u.role
        FROM sessions s
        JOIN users u ON u.id = s.user_id
        WHERE s.token = ?
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

/// Invalidate a session token
pub async fn delete(pool: &SqlitePool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}
