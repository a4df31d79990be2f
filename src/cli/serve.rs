use std::path::Path;
use crate::cli::commands::ServeArgs;
use crate::config::load_config;
use crate::errors::KdumpCheckError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), KdumpCheckError> {
    let mut config = load_config(args.config.as_deref().map(Path::new)).await?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(
        addr = %addr,
        max_upload_bytes = config.upload.max_bytes,
        staging_dir = %config.upload.staging_dir().display(),
        "Starting upload server"
    );

    let state = api::create_app_state(config);
    let app = api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| KdumpCheckError::Internal(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}
