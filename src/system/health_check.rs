use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::InnerState;

/// Reports `OK` while the video store answers a trivial query.
pub async fn health_check(State(inner): State<InnerState>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").execute(&inner.db).await {
        Ok(_) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not reach the database");
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
        }
    }
}
