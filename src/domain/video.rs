use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A catalog entry. `id` stays `None` until the store assigns one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub creator_name: Option<String>,
    pub creator_avatar_url: Option<String>,
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub view_count: i64,
    pub created_at: Option<NaiveDateTime>,
}
