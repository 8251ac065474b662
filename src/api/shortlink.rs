//! URL shortening proxy endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::proxy::shortener::ShortenError;

use super::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(rename = "serviceId")]
    pub service_id: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub success: bool,
    #[serde(rename = "shortUrl")]
    pub short_url: String,
    pub service: String,
}

/// POST /api/shorten - forward one request to the chosen shortening service.
///
/// Input problems are 400; provider failures are 502 with a pass-through
/// message. There is never a second provider attempt.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, (StatusCode, Json<ErrorBody>)> {
    match state
        .shortener
        .shorten(&state.http, &req.service_id, &req.url)
        .await
    {
        Ok(shortened) => Ok(Json(ShortenResponse {
            success: true,
            short_url: shortened.short_url,
            service: shortened.service,
        })),
        Err(e) => {
            let status = match &e {
                ShortenError::UnknownService(_) | ShortenError::BadTarget => {
                    StatusCode::BAD_REQUEST
                }
                ShortenError::Rejected { .. }
                | ShortenError::BadResponse { .. }
                | ShortenError::Transport { .. } => StatusCode::BAD_GATEWAY,
            };
            if status.is_server_error() {
                tracing::warn!("Shorten request failed: {}", e);
            }
            Err((status, Json(ErrorBody { error: e.to_string() })))
        }
    }
}

/// Error body shape shared by the proxy endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
