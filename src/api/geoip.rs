//! IP geolocation proxy endpoint.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, response::Json};

use super::routes::AppState;

/// Response header naming the provider that served the record, or
/// `fallback` when the placeholder was used.
pub const SOURCE_HEADER: &str = "x-ip-source";

/// GET /api/ip - geolocate the caller via the provider chain.
///
/// Always 200: when every provider fails the static fallback record is
/// served and the source header says so.
pub async fn lookup(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (record, source) = state.geo.lookup(&state.http).await;
    ([(SOURCE_HEADER, source)], Json(record))
}
