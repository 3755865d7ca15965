use axum::{
    extract::{Query, State},
    Json,
};

use crate::{api::common::SearchParams, catalog::VideoDisplay, errors::AppError, InnerState};

#[tracing::instrument(name = "Search videos", skip(inner))]
pub async fn search_videos(
    State(inner): State<InnerState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<VideoDisplay>>, AppError> {
    let videos = inner.catalog.search(params.query()).await?;
    Ok(Json(videos))
}

#[tracing::instrument(name = "Search suggestions", skip(inner))]
pub async fn search_suggestions(
    State(inner): State<InnerState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<String>>, AppError> {
    let suggestions = inner.catalog.suggest(params.query()).await?;
    Ok(Json(suggestions))
}
