//! Page routes. They return the model a template would be filled with.

use axum::{
    extract::{Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{catalog::VideoDisplay, errors::AppError, InnerState};

#[derive(Debug, Deserialize)]
pub struct HomeParams {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub videos: Vec<VideoDisplay>,
    pub search_query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoParams {
    pub id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_video: Option<VideoDisplay>,
    pub videos: Vec<VideoDisplay>,
}

/// Model for the hands-free browsing pages: the whole catalog in store order.
#[derive(Debug, Serialize)]
pub struct DiscoveryPage {
    pub videos: Vec<VideoDisplay>,
}

pub async fn root() -> Redirect {
    Redirect::to("/home")
}

#[tracing::instrument(name = "Home page", skip(inner))]
pub async fn home_page(
    State(inner): State<InnerState>,
    Query(params): Query<HomeParams>,
) -> Result<Json<HomePage>, AppError> {
    let videos = match params.search.as_deref() {
        Some(term) if !term.trim().is_empty() => inner.catalog.search(term).await?,
        _ => inner.catalog.list_all_random().await?,
    };

    Ok(Json(HomePage {
        videos,
        search_query: params.search,
    }))
}

/// The player page. A missing or unknown `id` leaves out `currentVideo`
/// instead of failing the page.
#[tracing::instrument(name = "Video page", skip(inner))]
pub async fn video_page(
    State(inner): State<InnerState>,
    Query(params): Query<VideoParams>,
) -> Result<Json<VideoPage>, AppError> {
    let current_video = match params.id {
        Some(id) => inner.catalog.get_by_id(id).await?,
        None => None,
    };

    let videos = inner.catalog.list_all_random().await?;

    Ok(Json(VideoPage {
        current_video,
        videos,
    }))
}

#[tracing::instrument(name = "Cursor mode page", skip(inner))]
pub async fn cursor_mode_page(
    State(inner): State<InnerState>,
) -> Result<Json<DiscoveryPage>, AppError> {
    discovery_page(&inner).await
}

#[tracing::instrument(name = "Gesture mode page", skip(inner))]
pub async fn gesture_mode_page(
    State(inner): State<InnerState>,
) -> Result<Json<DiscoveryPage>, AppError> {
    discovery_page(&inner).await
}

async fn discovery_page(inner: &InnerState) -> Result<Json<DiscoveryPage>, AppError> {
    let videos = inner.catalog.list_all().await?;
    Ok(Json(DiscoveryPage { videos }))
}
