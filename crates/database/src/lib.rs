//! SQLite persistence layer for the lang portal.
//!
//! This crate provides async database operations for vocabulary words, word
//! groups, study activities, and study sessions using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{migration, study_activity, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect, apply the base schema, then the one-time extension
//!     let db = Database::connect("sqlite:lang_portal.db?mode=rwc").await?;
//!     db.migrate().await?;
//!     migration::run(db.pool()).await?;
//!
//!     // Start a study session
//!     let session = study_activity::create_study_session(db.pool(), 1, 1).await?;
//!     println!("session {} started at {}", session.id, session.created_at);
//!
//!     Ok(())
//! }
//! ```

pub mod dashboard;
pub mod error;
pub mod group;
pub mod migration;
pub mod models;
pub mod reset;
pub mod study_activity;
pub mod study_session;
pub mod word;
pub mod word_review;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{DatabaseError, Result};
pub use models::{
    ActivitySession, Group, LastStudySession, Pagination, QuickStats, StudyActivity,
    StudyActivityDetail, StudyProgress, StudySession, StudySessionDetail, Word,
    WordReviewItem,
};
pub use word::NewWord;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/lang_portal.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run the base schema migrations.
    ///
    /// This should be called once after connecting, before
    /// [`migration::run`] applies the schema extension.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
