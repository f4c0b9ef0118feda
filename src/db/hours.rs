//! Worked-hours (time entry) storage

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::models::TimeEntry;

pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    start: NaiveDateTime,
    end: NaiveDateTime,
    note: &str,
) -> Result<TimeEntry, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO time_entries (user_id, start_at, end_at, note)
        VALUES (?, ?, ?, ?)
        RETURNING id, user_id, start_at, end_at, note
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .bind(note)
    .fetch_one(pool)
    .await
}

/// All entries, most recent start first (lead/manager view)
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<TimeEntry>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, user_id, start_at, end_at, note FROM time_entries ORDER BY start_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// One user's entries, most recent start first (waiter view)
pub async fn list_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<TimeEntry>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, user_id, start_at, end_at, note FROM time_entries \
         WHERE user_id = ? ORDER BY start_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Fetch a single entry, for the ownership check before deletion
pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<TimeEntry>, sqlx::Error> {
    sqlx::query_as("SELECT id, user_id, start_at, end_at, note FROM time_entries WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM time_entries WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
