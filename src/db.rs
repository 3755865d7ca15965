use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::config::Settings;
use crate::errors::AppError;

const CREATE_VIDEO_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS video (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    description TEXT,
    cloudinary_url TEXT NOT NULL,
    thumbnail_url TEXT,
    creator_name TEXT,
    creator_avatar_url TEXT,
    duration_seconds INTEGER,
    view_count INTEGER NOT NULL DEFAULT 0,
    created_at DATETIME
)
"#;

#[tracing::instrument(name = "init_db", skip(settings))]
pub async fn init_db(settings: &Settings) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.database_max_connections)
        .acquire_timeout(settings.query_timeout)
        .connect(&settings.database_url)
        .await
        .with_context(|| format!("could not connect to {}", settings.database_url))?;

    migrate(&pool).await?;

    tracing::info!(url = %settings.database_url, "database ready");
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_VIDEO_TABLE)
        .execute(pool)
        .await
        .context("could not create the video table")?;
    Ok(())
}

pub async fn timeout_query<T, F>(duration: Duration, fut: F) -> Result<T, AppError>
where
    F: std::future::Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(duration, fut).await {
        Ok(Ok(res)) => Ok(res),
        Ok(Err(e)) => Err(AppError::from(e)),
        Err(_) => Err(AppError::Timeout(duration)),
    }
}

/// Single-connection in-memory database; every extra connection would open a
/// fresh empty database.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    migrate(&pool).await.expect("migration");
    pool
}
