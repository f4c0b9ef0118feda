//! Database access layer

pub mod deposits;
pub mod hours;
pub mod reports;
pub mod reservations;
pub mod sessions;
pub mod shifts;
pub mod users;

use serde::Serialize;
use sqlx::SqlitePool;

/// Per-table record counts for the dashboard
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct DashboardStats {
    pub shifts: i64,
    pub reservations: i64,
    pub reports: i64,
    pub hours: i64,
    pub deposits: i64,
    pub users: i64,
}

pub async fn dashboard_stats(pool: &SqlitePool) -> Result<DashboardStats, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT
            (SELECT COUNT(*) FROM shifts)            AS shifts,
            (SELECT COUNT(*) FROM reservations)      AS reservations,
            (SELECT COUNT(*) FROM shift_reports)     AS reports,
            (SELECT COUNT(*) FROM time_entries)      AS hours,
            (SELECT COUNT(*) FROM clothing_deposits) AS deposits,
            (SELECT COUNT(*) FROM users)             AS users
        "#,
    )
    .fetch_one(pool)
    .await
}
