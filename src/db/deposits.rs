//! Clothing deposit storage

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::ClothingDeposit;

#[allow(clippy::too_many_arguments)]
pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    item: &str,
    size: &str,
    amount: f64,
    date: NaiveDate,
    returned: bool,
    notes: &str,
) -> Result<ClothingDeposit, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO clothing_deposits (user_id, item, size, amount, date, returned, notes)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, item, size, amount, date, returned, notes
        "#,
    )
    .bind(user_id)
    .bind(item)
    .bind(size)
    .bind(amount)
    .bind(date)
    .bind(returned)
    .bind(notes)
    .fetch_one(pool)
    .await
}

/// Most recent deposit date first
pub async fn list(pool: &SqlitePool) -> Result<Vec<ClothingDeposit>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, user_id, item, size, amount, date, returned, notes \
         FROM clothing_deposits ORDER BY date DESC",
    )
    .fetch_all(pool)
    .await
}

/// Flip the returned flag; yields the updated row, or None if absent
pub async fn toggle_returned(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<ClothingDeposit>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE clothing_deposits SET returned = NOT returned
        WHERE id = ?
        RETURNING id, user_id, item, size, amount, date, returned, notes
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM clothing_deposits WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
