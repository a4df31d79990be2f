pub mod routes;
pub mod models;
pub mod errors;

use std::sync::Arc;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::extraction::{Extractor, SolutionTable};
use crate::reporting::PageRenderer;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD: u64 = 1 << 20;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub extractor: Arc<Extractor>,
    pub pages: Arc<PageRenderer>,
}

pub fn create_app_state(config: AppConfig) -> AppState {
    let solutions = SolutionTable::new(&config.solutions);
    info!(solutions = solutions.len(), "Recommended-solution table loaded");

    let stylesheet = config
        .static_dir
        .as_ref()
        .filter(|dir| dir.join("style.css").is_file())
        .map(|_| "/static/style.css".to_string());
    let pages = PageRenderer::new(stylesheet, &config.upload.field_name);

    AppState {
        config: Arc::new(config),
        extractor: Arc::new(Extractor::new(solutions)),
        pages: Arc::new(pages),
    }
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_bytes.saturating_add(MULTIPART_OVERHEAD);
    let body_limit = usize::try_from(body_limit).unwrap_or(usize::MAX);

    let mut router = Router::new()
        .route("/", get(routes::upload::index))
        .route("/upload", post(routes::upload::upload_form))
        .route("/api/reports", post(routes::reports::create_report))
        .route("/api/health", get(routes::health::health_check));

    if let Some(dir) = &state.config.static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
