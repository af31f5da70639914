use crate::db::{create_db_pool, DatabaseConfig};
use sqlx::PgPool;
use std::env;

/// Shared application state.
/// Holds the process-wide database pool, created once at startup and
/// cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|e| anyhow::anyhow!("DATABASE_URL must be set: {}", e))?;

        let db_config = match env::var("APP_ENV").as_deref() {
            Ok("production") => DatabaseConfig::production(),
            _ => DatabaseConfig::development(),
        };
        let db_pool = create_db_pool(&database_url, db_config).await?;

        Ok(AppState { db_pool })
    }
}
