//! Shift report storage

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::ShiftReport;

pub async fn create(
    pool: &SqlitePool,
    date: NaiveDate,
    lead_id: i64,
    revenue: f64,
    issues: &str,
    notes: &str,
) -> Result<ShiftReport, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO shift_reports (date, lead_id, revenue, issues, notes)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, date, lead_id, revenue, issues, notes
        "#,
    )
    .bind(date)
    .bind(lead_id)
    .bind(revenue)
    .bind(issues)
    .bind(notes)
    .fetch_one(pool)
    .await
}

/// Most recent report date first
pub async fn list(pool: &SqlitePool) -> Result<Vec<ShiftReport>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, date, lead_id, revenue, issues, notes FROM shift_reports ORDER BY date DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM shift_reports WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
