//! Application state

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;
use crate::db;
use crate::models::Role;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl AppState {
    /// Create a new AppState: connect, run migrations, seed default users
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let state = Self { pool };
        if config.seed_default_users {
            state.seed_default_users().await?;
        }
        Ok(state)
    }

    /// In-memory state for tests. A single connection keeps the in-memory
    /// database alive across every query, and the placeholder accounts are
    /// always seeded.
    pub async fn new_in_memory() -> Result<Self, BoxError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let state = Self { pool };
        state.seed_default_users().await?;
        Ok(state)
    }

    /// Create the three placeholder accounts when the user table is empty.
    /// Ops tooling disables this in production via SEED_DEFAULT_USERS=false.
    pub async fn seed_default_users(&self) -> Result<(), BoxError> {
        if db::users::count(&self.pool).await? > 0 {
            return Ok(());
        }

        for (username, password, role, full_name) in [
            ("admin", "admin123", Role::Manager, "Operations Manager"),
            ("lead", "lead123", Role::ShiftLead, "Shift Lead"),
            ("waiter", "waiter123", Role::Waiter, "Waiter"),
        ] {
            let hash = crate::util::hash_password(password)
                .map_err(|e| format!("failed to hash seed password: {e}"))?;
            db::users::create(&self.pool, username, full_name, role, &hash).await?;
        }
        tracing::warn!(
            "seeded placeholder accounts admin/lead/waiter with default passwords; \
             change them before exposing this instance"
        );
        Ok(())
    }
}
