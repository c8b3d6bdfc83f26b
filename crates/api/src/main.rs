//! JSON API for the lang portal.
//!
//! Exposes the dashboard, study activity, word, and group services over
//! HTTP. The database schema is migrated and extended at startup, before
//! the server accepts traffic.

mod config;
mod error;
mod routes;
mod state;

use database::{migration, Database};
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting lang portal API");

    // Connect to database; migration failure is fatal to startup
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;
    migration::run(db.pool()).await?;

    // Build application state
    let state = AppState::new(db);

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "Lang portal API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
