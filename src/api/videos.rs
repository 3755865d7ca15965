use axum::{
    extract::{Path, State},
    Json,
};

use crate::{catalog::VideoDisplay, domain::Video, errors::AppError, InnerState};

#[tracing::instrument(name = "Get all videos", skip(inner))]
pub async fn all_videos(
    State(inner): State<InnerState>,
) -> Result<Json<Vec<VideoDisplay>>, AppError> {
    let videos = inner.catalog.list_all().await?;
    Ok(Json(videos))
}

/// Unknown ids answer `200` with a `null` body.
#[tracing::instrument(name = "Get video by id", skip(inner))]
pub async fn get_video_by_id(
    State(inner): State<InnerState>,
    Path(video_id): Path<i64>,
) -> Result<Json<Option<VideoDisplay>>, AppError> {
    let video = inner.catalog.get_by_id(video_id).await?;
    if video.is_none() {
        tracing::debug!(video_id, "video not found");
    }
    Ok(Json(video))
}

#[tracing::instrument(name = "Create video", skip(inner, video))]
pub async fn create_video(
    State(inner): State<InnerState>,
    Json(video): Json<Video>,
) -> Result<Json<Video>, AppError> {
    let created = inner.catalog.create(video).await?;
    Ok(Json(created))
}
