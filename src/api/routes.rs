//! HTTP route table and server startup.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::proxy::geoip::GeoLocator;
use crate::proxy::shortener::Shortener;

use super::{catalog as catalog_api, geoip as geoip_api, shortlink, tools as tools_api};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Shared client for all upstream provider calls.
    pub http: reqwest::Client,
    pub catalog: Catalog,
    pub shortener: Shortener,
    pub geo: GeoLocator,
}

impl AppState {
    /// Assemble state with the built-in catalog and provider sets.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = config.http_client()?;
        Ok(Self {
            config,
            http,
            catalog: Catalog::builtin()?,
            shortener: Shortener::builtin(),
            geo: GeoLocator::builtin(),
        })
    }
}

/// Build the route table.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        // Navigation and sitemap
        .route("/api/catalog", get(catalog_api::list_tools))
        .route("/api/catalog/:slug", get(catalog_api::get_tool))
        .route("/sitemap.xml", get(catalog_api::sitemap))
        // Tool transforms
        .route("/api/tools/json/format", post(tools_api::json_format))
        .route("/api/tools/json/validate", post(tools_api::json_validate))
        .route("/api/tools/base64/encode", post(tools_api::base64_encode))
        .route("/api/tools/base64/decode", post(tools_api::base64_decode))
        .route("/api/tools/url/encode", post(tools_api::url_encode))
        .route("/api/tools/url/decode", post(tools_api::url_decode))
        .route("/api/tools/url/parse", post(tools_api::url_parse))
        .route("/api/tools/hash", post(tools_api::hash))
        .route("/api/tools/color/convert", post(tools_api::color_convert))
        .route("/api/tools/calc", post(tools_api::calc))
        .route("/api/tools/uuid", post(tools_api::uuid_batch))
        .route("/api/tools/random-string", post(tools_api::random_string))
        .route(
            "/api/tools/timestamp/convert",
            post(tools_api::timestamp_convert),
        )
        // Proxy endpoints
        .route("/api/shorten", post(shortlink::shorten))
        .route("/api/ip", get(geoip_api::lookup))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState::new(config)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    tool_count: usize,
}

/// Health check endpoint.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        tool_count: state.catalog.entries().len(),
    })
}
