//! User account storage

use sqlx::SqlitePool;

use crate::models::{Role, User};

pub async fn create(
    pool: &SqlitePool,
    username: &str,
    full_name: &str,
    role: Role,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO users (username, full_name, role, password_hash)
        VALUES (?, ?, ?, ?)
        RETURNING id, username, full_name, role, password_hash
        "#,
    )
    .bind(username)
    .bind(full_name)
    .bind(role)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, username, full_name, role, password_hash FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT id, username, full_name, role, password_hash FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Admin listing, ordered by username
pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, username, full_name, role, password_hash FROM users ORDER BY username ASC",
    )
    .fetch_all(pool)
    .await
}

/// Team directory, grouped by role then by username
pub async fn list_team(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, username, full_name, role, password_hash FROM users \
         ORDER BY role DESC, username ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
}

/// Outcome of a user deletion attempt
#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// Time entries or deposits still reference the user
    InUse,
}

/// Delete a user. Reports they led are kept with `lead_id` nullified;
/// deletion is refused while time entries or deposits reference them.
/// Runs as one transaction so a refusal leaves no partial state.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<DeleteOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let references: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM time_entries WHERE user_id = ?) \
              + (SELECT COUNT(*) FROM clothing_deposits WHERE user_id = ?)",
    )
    .bind(id)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;
    if references > 0 {
        return Ok(DeleteOutcome::InUse);
    }

    sqlx::query("UPDATE shift_reports SET lead_id = NULL WHERE lead_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    // Sessions go with the account (ON DELETE CASCADE).
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        return Ok(DeleteOutcome::NotFound);
    }

    tx.commit().await?;
    Ok(DeleteOutcome::Deleted)
}
