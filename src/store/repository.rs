use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::db::timeout_query;
use crate::domain::Video;
use crate::errors::AppError;
use crate::store::entity::VideoRow;

/// Storage operations the catalog needs. Implementations own ordering:
/// `find_all` is insertion order, the random variants reshuffle per call.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn save(&self, video: &Video) -> Result<Video, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Video>, AppError>;
    async fn find_all(&self) -> Result<Vec<Video>, AppError>;
    async fn find_all_random(&self) -> Result<Vec<Video>, AppError>;
    /// Case-insensitive substring match on title, description or creator name.
    async fn search_by_query(&self, query: &str) -> Result<Vec<Video>, AppError>;
}

#[derive(Debug, Clone)]
pub struct SqlVideoRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl SqlVideoRepository {
    pub fn new(pool: SqlitePool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl VideoRepository for SqlVideoRepository {
    #[tracing::instrument(name = "Insert video", skip(self, video), fields(title = ?video.title))]
    async fn save(&self, video: &Video) -> Result<Video, AppError> {
        let row = timeout_query(
            self.query_timeout,
            sqlx::query_as::<_, VideoRow>(
                r#"INSERT INTO video (title, description, cloudinary_url, thumbnail_url, creator_name, creator_avatar_url, duration_seconds, view_count, created_at)
                   VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"#,
            )
            .bind(&video.title)
            .bind(&video.description)
            .bind(&video.video_url)
            .bind(&video.thumbnail_url)
            .bind(&video.creator_name)
            .bind(&video.creator_avatar_url)
            .bind(video.duration_seconds)
            .bind(video.view_count)
            .bind(video.created_at)
            .fetch_one(&self.pool),
        )
        .await?;

        tracing::debug!(id = row.id, "video stored");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Video>, AppError> {
        let row = timeout_query(
            self.query_timeout,
            sqlx::query_as::<_, VideoRow>(r#"SELECT * FROM video WHERE id = ?"#)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await?;

        Ok(row.map(Video::from))
    }

    async fn find_all(&self) -> Result<Vec<Video>, AppError> {
        let rows = timeout_query(
            self.query_timeout,
            sqlx::query_as::<_, VideoRow>(r#"SELECT * FROM video ORDER BY id"#)
                .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows.into_iter().map(Video::from).collect())
    }

    async fn find_all_random(&self) -> Result<Vec<Video>, AppError> {
        let rows = timeout_query(
            self.query_timeout,
            sqlx::query_as::<_, VideoRow>(r#"SELECT * FROM video ORDER BY RANDOM()"#)
                .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows.into_iter().map(Video::from).collect())
    }

    #[tracing::instrument(name = "Search videos", skip(self))]
    async fn search_by_query(&self, query: &str) -> Result<Vec<Video>, AppError> {
        let needle = query.to_lowercase();

        // SQLite's LOWER() and LIKE only fold ASCII, so matching happens here
        let rows = timeout_query(
            self.query_timeout,
            sqlx::query_as::<_, VideoRow>(r#"SELECT * FROM video ORDER BY RANDOM()"#)
                .fetch_all(&self.pool),
        )
        .await?;

        let matches: Vec<Video> = rows
            .into_iter()
            .filter(|row| row_matches(row, &needle))
            .map(Video::from)
            .collect();

        tracing::debug!(matches = matches.len(), "search finished");
        Ok(matches)
    }
}

/// True when `needle` (already lower-cased) occurs in the title, description
/// or creator name, ignoring case.
fn row_matches(row: &VideoRow, needle: &str) -> bool {
    [&row.title, &row.description, &row.creator_name]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}
