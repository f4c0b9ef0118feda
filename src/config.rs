//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Whether to create the placeholder admin/lead/waiter accounts when the
    /// user table is empty. Defaults to on in development, off everywhere
    /// else; SEED_DEFAULT_USERS overrides either way.
    pub seed_default_users: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let seed_default_users = match std::env::var("SEED_DEFAULT_USERS") {
            Ok(v) => match v.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(format!("SEED_DEFAULT_USERS must be a boolean, got {other:?}").into());
                }
            },
            Err(_) => environment == "development",
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://bistro_ops.db?mode=rwc".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment,
            seed_default_users,
        })
    }
}
