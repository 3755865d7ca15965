//! HTTP entry points: the JSON REST surface under `/api` and the page-model
//! routes the front end renders from.

pub mod common;
pub mod pages;
pub mod search;
pub mod videos;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::common::tracing::{
    make_custom_span, on_custom_failure, on_custom_request, on_custom_response,
};
use crate::config::Settings;
use crate::InnerState;

/// Creates the application router with every route and the shared layers.
#[tracing::instrument(name = "create_api_router", skip(state, cors))]
pub fn create_api_router(state: InnerState, cors: CorsLayer) -> Router {
    tracing::info!("Creating API router");

    Router::new()
        .route("/", get(pages::root))
        .route("/home", get(pages::home_page))
        .route("/video", get(pages::video_page))
        .route("/cursor-mode", get(pages::cursor_mode_page))
        .route("/gesture-mode", get(pages::gesture_mode_page))
        .route("/api/videos", get(videos::all_videos).post(videos::create_video))
        .route("/api/videos/:video_id", get(videos::get_video_by_id))
        .route("/api/search", get(search::search_videos))
        .route("/api/search/suggestions", get(search::search_suggestions))
        .merge(crate::system::create_system_router())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_custom_span::<Body>)
                .on_request(on_custom_request::<Body>)
                .on_response(on_custom_response::<Body>)
                .on_failure(on_custom_failure),
        )
        .with_state(state)
}

/// Restricts cross-origin calls to the configured front end, or allows any
/// origin when none is configured.
pub fn cors_layer(settings: &Settings) -> Result<CorsLayer> {
    let Some(origin) = settings.cors_allowed_origin.as_deref() else {
        return Ok(CorsLayer::permissive());
    };

    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("CORS_ALLOWED_ORIGIN is not a valid header value: {origin}"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
