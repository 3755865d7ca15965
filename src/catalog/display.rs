use chrono::NaiveDateTime;
use serde::Serialize;

use crate::catalog::format::{format_duration, format_view_count, relative_age};
use crate::domain::Video;

/// A `Video` plus the strings pages show next to it. Rebuilt on every read.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoDisplay {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub creator_name: Option<String>,
    pub creator_avatar_url: Option<String>,
    pub duration_seconds: Option<i32>,
    pub view_count: i64,
    pub created_at: Option<NaiveDateTime>,
    pub time_ago: String,
    pub formatted_view_count: String,
    pub formatted_duration: String,
}

impl VideoDisplay {
    pub fn from_video(video: Video, now: NaiveDateTime) -> Self {
        Self {
            time_ago: relative_age(video.created_at, now),
            formatted_view_count: format_view_count(Some(video.view_count)),
            formatted_duration: format_duration(video.duration_seconds),
            id: video.id,
            title: video.title,
            description: video.description,
            video_url: video.video_url,
            thumbnail_url: video.thumbnail_url,
            creator_name: video.creator_name,
            creator_avatar_url: video.creator_avatar_url,
            duration_seconds: video.duration_seconds,
            view_count: video.view_count,
            created_at: video.created_at,
        }
    }
}
