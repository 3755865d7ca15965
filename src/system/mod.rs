//! System-level routes.

pub mod health_check;

use axum::{routing::get, Router};

use crate::InnerState;

/// Creates the system router
#[tracing::instrument(name = "create_system_router")]
pub fn create_system_router() -> Router<InnerState> {
    tracing::info!("Creating system router");

    Router::new().route("/health", get(health_check::health_check))
}
