//! Base64 and URL codecs.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine as _;
use serde::Serialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid Base64 input: {0}")]
    BadBase64(#[from] base64::DecodeError),
    #[error("decoded bytes are not valid UTF-8")]
    NotUtf8,
    #[error("invalid percent-encoding: {0}")]
    BadPercentEncoding(String),
    #[error("invalid URL: {0}")]
    BadUrl(#[from] url::ParseError),
}

/// Encode text as Base64, optionally with the URL-safe alphabet.
pub fn base64_encode(input: &str, url_safe: bool) -> String {
    if url_safe {
        URL_SAFE.encode(input.as_bytes())
    } else {
        STANDARD.encode(input.as_bytes())
    }
}

/// Decode Base64 back to text. Fails on bad alphabet or non-UTF-8 payloads.
pub fn base64_decode(input: &str, url_safe: bool) -> Result<String, CodecError> {
    let bytes = if url_safe {
        URL_SAFE.decode(input.trim())?
    } else {
        STANDARD.decode(input.trim())?
    };
    String::from_utf8(bytes).map_err(|_| CodecError::NotUtf8)
}

/// Percent-encode a URL component.
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decode a percent-encoded URL component.
pub fn url_decode(input: &str) -> Result<String, CodecError> {
    urlencoding::decode(input)
        .map(|c| c.into_owned())
        .map_err(|e| CodecError::BadPercentEncoding(e.to_string()))
}

/// The pieces of a parsed URL.
#[derive(Debug, Clone, Serialize)]
pub struct UrlParts {
    pub scheme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
    /// Decoded query parameters in document order.
    pub query_params: Vec<(String, String)>,
}

/// Split a full URL into its parts.
pub fn parse_url(input: &str) -> Result<UrlParts, CodecError> {
    let url = Url::parse(input.trim())?;
    Ok(UrlParts {
        scheme: url.scheme().to_string(),
        host: url.host_str().map(|h| h.to_string()),
        port: url.port(),
        path: url.path().to_string(),
        query: url.query().map(|q| q.to_string()),
        fragment: url.fragment().map(|f| f.to_string()),
        query_params: url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_standard_and_url_safe() {
        assert_eq!(base64_encode("hello?>", false), "aGVsbG8/Pg==");
        assert_eq!(base64_encode("hello?>", true), "aGVsbG8_Pg==");
        assert_eq!(base64_decode("aGVsbG8/Pg==", false).unwrap(), "hello?>");
        assert_eq!(base64_decode("aGVsbG8_Pg==", true).unwrap(), "hello?>");
    }

    #[test]
    fn base64_rejects_garbage() {
        assert!(base64_decode("not base64!!", false).is_err());
    }

    #[test]
    fn base64_rejects_non_utf8_payload() {
        // 0xFF 0xFE is not valid UTF-8
        let encoded = STANDARD.encode([0xFF, 0xFE]);
        assert!(matches!(
            base64_decode(&encoded, false),
            Err(CodecError::NotUtf8)
        ));
    }

    #[test]
    fn url_component_round_trip() {
        let encoded = url_encode("a b&c=d");
        assert_eq!(encoded, "a%20b%26c%3Dd");
        assert_eq!(url_decode(&encoded).unwrap(), "a b&c=d");
    }

    #[test]
    fn parse_url_extracts_parts() {
        let parts = parse_url("https://example.com:8080/p/q?x=1&y=two#frag").unwrap();
        assert_eq!(parts.scheme, "https");
        assert_eq!(parts.host.as_deref(), Some("example.com"));
        assert_eq!(parts.port, Some(8080));
        assert_eq!(parts.path, "/p/q");
        assert_eq!(parts.query.as_deref(), Some("x=1&y=two"));
        assert_eq!(parts.fragment.as_deref(), Some("frag"));
        assert_eq!(parts.query_params[1], ("y".to_string(), "two".to_string()));
    }

    #[test]
    fn parse_url_rejects_relative() {
        assert!(parse_url("/just/a/path").is_err());
    }
}
