//! Shift plan storage

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::models::Shift;

pub async fn create(
    pool: &SqlitePool,
    employee: &str,
    role: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Shift, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO shifts (employee, role, start_at, end_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, employee, role, start_at, end_at
        "#,
    )
    .bind(employee)
    .bind(role)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
}

/// Most recent shifts first
pub async fn list(pool: &SqlitePool) -> Result<Vec<Shift>, sqlx::Error> {
    sqlx::query_as("SELECT id, employee, role, start_at, end_at FROM shifts ORDER BY start_at DESC")
        .fetch_all(pool)
        .await
}

/// Returns false when no row had the given id
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM shifts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
