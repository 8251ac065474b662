//! Tool transform endpoints.
//!
//! Thin wrappers over `crate::tools`: deserialize the request, run the pure
//! transform, map failures to 400 with the error's own message. These
//! handlers never touch the network.

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::tools::{calc as calc_tool, codec, color, generate, hashing, json as json_tool, timestamp};

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

fn bad_request<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, e.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON formatter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JsonFormatRequest {
    pub text: String,
    /// Indent width in spaces; 0 minifies.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_indent() -> usize {
    2
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub result: String,
}

/// POST /api/tools/json/format
pub async fn json_format(Json(req): Json<JsonFormatRequest>) -> ApiResult<TextResponse> {
    let result = if req.indent == 0 {
        json_tool::minify(&req.text)
    } else {
        json_tool::format(&req.text, req.indent)
    }
    .map_err(bad_request)?;
    Ok(Json(TextResponse { result }))
}

#[derive(Debug, Deserialize)]
pub struct JsonValidateRequest {
    pub text: String,
}

/// POST /api/tools/json/validate
///
/// Always 200: an invalid document is a result, not a request error.
pub async fn json_validate(
    Json(req): Json<JsonValidateRequest>,
) -> Json<json_tool::ValidationReport> {
    Json(json_tool::validate(&req.text))
}

// ─────────────────────────────────────────────────────────────────────────────
// Base64 / URL codecs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct Base64Request {
    pub text: String,
    #[serde(default)]
    pub url_safe: bool,
}

/// POST /api/tools/base64/encode
pub async fn base64_encode(Json(req): Json<Base64Request>) -> Json<TextResponse> {
    Json(TextResponse {
        result: codec::base64_encode(&req.text, req.url_safe),
    })
}

/// POST /api/tools/base64/decode
pub async fn base64_decode(Json(req): Json<Base64Request>) -> ApiResult<TextResponse> {
    let result = codec::base64_decode(&req.text, req.url_safe).map_err(bad_request)?;
    Ok(Json(TextResponse { result }))
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// POST /api/tools/url/encode
pub async fn url_encode(Json(req): Json<TextRequest>) -> Json<TextResponse> {
    Json(TextResponse {
        result: codec::url_encode(&req.text),
    })
}

/// POST /api/tools/url/decode
pub async fn url_decode(Json(req): Json<TextRequest>) -> ApiResult<TextResponse> {
    let result = codec::url_decode(&req.text).map_err(bad_request)?;
    Ok(Json(TextResponse { result }))
}

/// POST /api/tools/url/parse
pub async fn url_parse(Json(req): Json<TextRequest>) -> ApiResult<codec::UrlParts> {
    let parts = codec::parse_url(&req.text).map_err(bad_request)?;
    Ok(Json(parts))
}

// ─────────────────────────────────────────────────────────────────────────────
// Hashing
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct HashRequest {
    pub text: String,
    pub algorithm: hashing::HashAlgorithm,
}

#[derive(Debug, Serialize)]
pub struct HashResponse {
    pub algorithm: &'static str,
    pub digest: String,
}

/// POST /api/tools/hash
pub async fn hash(Json(req): Json<HashRequest>) -> Json<HashResponse> {
    Json(HashResponse {
        algorithm: req.algorithm.as_str(),
        digest: hashing::digest_hex(req.algorithm, &req.text),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Color converter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ColorRequest {
    pub color: String,
}

/// POST /api/tools/color/convert
pub async fn color_convert(Json(req): Json<ColorRequest>) -> ApiResult<color::ColorTriple> {
    let triple = color::convert(&req.color).map_err(bad_request)?;
    Ok(Json(triple))
}

// ─────────────────────────────────────────────────────────────────────────────
// Calculator
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CalcRequest {
    pub expression: String,
}

#[derive(Debug, Serialize)]
pub struct CalcResponse {
    pub result: f64,
}

/// POST /api/tools/calc
pub async fn calc(Json(req): Json<CalcRequest>) -> ApiResult<CalcResponse> {
    let result = calc_tool::evaluate(&req.expression).map_err(bad_request)?;
    Ok(Json(CalcResponse { result }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Generators
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UuidRequest {
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

#[derive(Debug, Serialize)]
pub struct UuidResponse {
    pub uuids: Vec<String>,
}

/// POST /api/tools/uuid
pub async fn uuid_batch(Json(req): Json<UuidRequest>) -> ApiResult<UuidResponse> {
    let uuids = generate::uuids(req.count).map_err(bad_request)?;
    Ok(Json(UuidResponse { uuids }))
}

#[derive(Debug, Deserialize)]
pub struct RandomStringRequest {
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_true")]
    pub uppercase: bool,
    #[serde(default = "default_true")]
    pub digits: bool,
    #[serde(default)]
    pub symbols: bool,
}

fn default_length() -> usize {
    16
}

fn default_true() -> bool {
    true
}

/// POST /api/tools/random-string
pub async fn random_string(Json(req): Json<RandomStringRequest>) -> ApiResult<TextResponse> {
    let classes = generate::CharClasses {
        lowercase: req.lowercase,
        uppercase: req.uppercase,
        digits: req.digits,
        symbols: req.symbols,
    };
    let result = generate::random_string(req.length, classes).map_err(bad_request)?;
    Ok(Json(TextResponse { result }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Timestamp converter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TimestampRequest {
    /// Numeric timestamp plus its unit.
    Unix { value: i64, unit: timestamp::Unit },
    /// RFC 3339 date string.
    Date { date: String },
}

/// POST /api/tools/timestamp/convert
pub async fn timestamp_convert(
    Json(req): Json<TimestampRequest>,
) -> ApiResult<timestamp::Instant> {
    let instant = match req {
        TimestampRequest::Unix { value, unit } => timestamp::from_unix(value, unit),
        TimestampRequest::Date { date } => timestamp::from_rfc3339(&date),
    }
    .map_err(bad_request)?;
    Ok(Json(instant))
}
