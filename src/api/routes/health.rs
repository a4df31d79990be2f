use axum::Json;
use crate::api::models::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "kdumpcheck".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: option_env!("KDUMPCHECK_GIT_HASH").map(str::to_string),
        built_at: option_env!("KDUMPCHECK_BUILT_AT").map(str::to_string),
    })
}
