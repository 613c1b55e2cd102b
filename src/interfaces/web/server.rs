use super::embedded_assets::WebAssets;
use super::{AppState, list_devices, register_device, server_time};
use crate::HubConfig;
use crate::domain::device::DeviceRegistry;
use axum::{
    Router,
    body::Body,
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Build the hub router around the injected registry.
///
/// Kept separate from [`create_server`] so tests can drive the routes
/// without binding a socket.
pub fn build_router(registry: Arc<dyn DeviceRegistry>) -> Router {
    let state = AppState::new(registry);

    Router::new()
        // API endpoints
        .route("/device/register", post(register_device))
        .route("/devices", get(list_devices))
        .route("/time", get(server_time))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Registration payloads are a handful of fields; anything
                // bigger than this is not a relay device talking to us
                .layer(DefaultBodyLimit::max(64 * 1024))
                .layer(CorsLayer::permissive()),
        )
        // Everything else is the embedded dashboard
        .fallback(static_handler)
}

pub async fn create_server(
    config: HubConfig,
    registry: Arc<dyn DeviceRegistry>,
) -> anyhow::Result<()> {
    info!("Starting relay hub web server...");

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = build_router(registry);

    let listener = TcpListener::bind(&addr).await?;

    println!("🌐 Hub started successfully!");
    println!("   Dashboard: http://{addr}");
    println!("   Press Ctrl+C to stop");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

/// Serve the embedded dashboard assets.
async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    // The root path maps to the dashboard entry document
    let path = if path.is_empty() { "index.html" } else { path };

    match WebAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .body(Body::from(content.data.to_vec()))
                .unwrap()
        }
        None => {
            // Unknown paths fall back to index.html so dashboard routes
            // resolve client-side
            if let Some(content) = WebAssets::get("index.html") {
                Response::builder()
                    .status(StatusCode::OK)
                    .header(header::CONTENT_TYPE, "text/html")
                    .body(Body::from(content.data.to_vec()))
                    .unwrap()
            } else {
                Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .body(Body::from("404 Not Found"))
                    .unwrap()
            }
        }
    }
}
