use anyhow::Result;
use sea_orm::Database;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Local SQLite file, created on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://holocron.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Connect to the database and build the shared application state
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;
    debug!("Database connection pool ready");

    Ok(AppState { db })
}

/// `host:port` string accepted by `TcpListener::bind`
pub fn bind_address(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}
