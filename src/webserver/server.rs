/// Axum webserver implementation
///
/// Server lifecycle: bind, serve, and stop gracefully when the caller's
/// shutdown future resolves.
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::{
    config::WebserverConfig,
    errors::{EcoError, EcoResult},
    logger::{self, LogTag},
    webserver::{routes, state::AppState},
};

/// Start the webserver
///
/// Blocks until `shutdown` resolves and in-flight requests have finished.
pub async fn start_server<F>(
    state: Arc<AppState>,
    config: &WebserverConfig,
    shutdown: F,
) -> EcoResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| EcoError::Config(format!("Invalid bind address: {}", e)))?;

    let listener = TcpListener::bind(&addr).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::AddrInUse => EcoError::Http(format!(
            "Failed to bind to {}: Address already in use. Set PORT or webserver.port to another value.",
            addr
        )),
        std::io::ErrorKind::PermissionDenied => EcoError::Http(format!(
            "Failed to bind to {}: Permission denied. Use a port above 1024.",
            addr
        )),
        _ => EcoError::Http(format!("Failed to bind to {}: {}", addr, e)),
    })?;

    logger::info(
        LogTag::Webserver,
        &format!("✅ Webserver listening on http://{}", addr),
    );
    logger::debug(
        LogTag::Webserver,
        &format!("📊 API endpoints available at http://{}/api/v1", addr),
    );

    let app = build_app(state);

    let shutdown_signal = async move {
        shutdown.await;
        logger::debug(
            LogTag::Webserver,
            "Received shutdown signal, stopping webserver...",
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| EcoError::Http(format!("Server error: {}", e)))?;

    logger::info(LogTag::Webserver, "Webserver stopped gracefully");
    Ok(())
}

/// Build the Axum application with all routes and middleware
pub fn build_app(state: Arc<AppState>) -> Router {
    routes::create_router(state).layer(CorsLayer::permissive())
}
