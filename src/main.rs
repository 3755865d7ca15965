mod api;
mod catalog;
mod config;
mod db;
mod domain;
mod errors;
mod seed;
mod store;
mod system;

use std::error::Error;
use std::sync::Arc;

use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use sqlx::SqlitePool;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::api::{cors_layer, create_api_router};
use crate::catalog::CatalogService;
use crate::config::Settings;
use crate::db::init_db;
use crate::domain::{Clock, SystemClock};
use crate::seed::seed_sample_videos;
use crate::store::SqlVideoRepository;

#[derive(Clone)]
pub struct InnerState {
    pub db: SqlitePool,
    pub catalog: CatalogService,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wetube=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    let db = init_db(&settings).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let repository = SqlVideoRepository::new(db.clone(), settings.query_timeout);
    let catalog = CatalogService::new(Arc::new(repository), clock.clone());

    if settings.seed_sample_data {
        seed_sample_videos(&catalog, clock.now()).await?;
    }

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app_state = InnerState { db, catalog };

    let app = create_api_router(app_state, cors_layer(&settings)?)
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer);

    let listener = tokio::net::TcpListener::bind(&settings.bind_address).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
