//! Row type for the `video` table and its mapping to the domain `Video`.

use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::domain::Video;

#[derive(Debug, Clone, FromRow)]
pub struct VideoRow {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cloudinary_url: String,
    pub thumbnail_url: Option<String>,
    pub creator_name: Option<String>,
    pub creator_avatar_url: Option<String>,
    pub duration_seconds: Option<i32>,
    pub view_count: i64,
    pub created_at: Option<NaiveDateTime>,
}

impl From<VideoRow> for Video {
    fn from(row: VideoRow) -> Self {
        Video {
            id: Some(row.id),
            title: row.title,
            description: row.description,
            video_url: Some(row.cloudinary_url),
            thumbnail_url: row.thumbnail_url,
            creator_name: row.creator_name,
            creator_avatar_url: row.creator_avatar_url,
            duration_seconds: row.duration_seconds,
            view_count: row.view_count,
            created_at: row.created_at,
        }
    }
}
