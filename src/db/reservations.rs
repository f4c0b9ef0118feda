//! Reservation storage

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::models::Reservation;

pub async fn create(
    pool: &SqlitePool,
    customer: &str,
    size: i64,
    at: NaiveDateTime,
    notes: &str,
) -> Result<Reservation, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO reservations (customer, size, at, notes)
        VALUES (?, ?, ?, ?)
        RETURNING id, customer, size, at, notes
        "#,
    )
    .bind(customer)
    .bind(size)
    .bind(at)
    .bind(notes)
    .fetch_one(pool)
    .await
}

/// Most recent reservation time first
pub async fn list(pool: &SqlitePool) -> Result<Vec<Reservation>, sqlx::Error> {
    sqlx::query_as("SELECT id, customer, size, at, notes FROM reservations ORDER BY at DESC")
        .fetch_all(pool)
        .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
