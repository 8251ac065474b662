//! URL shortening proxy.
//!
//! Forwards one request to exactly one of a fixed set of public shortening
//! services, chosen by service id. The provider's response shape is
//! validated per service; there is no retry across providers and no caching
//! of previously shortened URLs.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("unknown shortening service: {0}")]
    UnknownService(String),
    #[error("target must be an absolute http(s) URL")]
    BadTarget,
    #[error("{service} rejected the request: {message}")]
    Rejected { service: String, message: String },
    #[error("{service} returned an unexpected response: {message}")]
    BadResponse { service: String, message: String },
    #[error("request to {service} failed: {message}")]
    Transport { service: String, message: String },
}

/// How a provider's request is built and its response validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// is.gd-style JSON API: `GET ?format=json&url=...`, answers
    /// `{"shorturl"}` or `{"errormessage"}`.
    GdJson,
    /// tinyurl-style: `GET ?url=...`, answers the short URL as plain text.
    PlainText,
    /// cleanuri-style: form POST with `url=...`, answers `{"result_url"}`
    /// or `{"error"}`.
    CleanUri,
}

/// One shortening service.
#[derive(Debug, Clone)]
pub struct ShortenProvider {
    /// Stable id used in requests (`serviceId`).
    pub id: String,
    /// Human-readable service name.
    pub label: String,
    pub endpoint: String,
    pub kind: ProviderKind,
}

/// A successful shortening result.
#[derive(Debug, Clone)]
pub struct Shortened {
    pub short_url: String,
    /// Label of the service that produced it.
    pub service: String,
}

/// The fixed provider set behind the shortening endpoint.
#[derive(Debug, Clone)]
pub struct Shortener {
    providers: Vec<ShortenProvider>,
}

#[derive(Deserialize)]
struct GdResponse {
    shorturl: Option<String>,
    errormessage: Option<String>,
}

#[derive(Deserialize)]
struct CleanUriResponse {
    result_url: Option<String>,
    error: Option<String>,
}

impl Shortener {
    /// Construct with an explicit provider list. Used by tests to point
    /// providers at a local mock server.
    pub fn new(providers: Vec<ShortenProvider>) -> Self {
        Self { providers }
    }

    /// The four public services the site offers.
    pub fn builtin() -> Self {
        Self::new(vec![
            ShortenProvider {
                id: "isgd".to_string(),
                label: "is.gd".to_string(),
                endpoint: "https://is.gd/create.php".to_string(),
                kind: ProviderKind::GdJson,
            },
            ShortenProvider {
                id: "vgd".to_string(),
                label: "v.gd".to_string(),
                endpoint: "https://v.gd/create.php".to_string(),
                kind: ProviderKind::GdJson,
            },
            ShortenProvider {
                id: "tinyurl".to_string(),
                label: "TinyURL".to_string(),
                endpoint: "https://tinyurl.com/api-create.php".to_string(),
                kind: ProviderKind::PlainText,
            },
            ShortenProvider {
                id: "cleanuri".to_string(),
                label: "CleanURI".to_string(),
                endpoint: "https://cleanuri.com/api/v1/shorten".to_string(),
                kind: ProviderKind::CleanUri,
            },
        ])
    }

    pub fn providers(&self) -> &[ShortenProvider] {
        &self.providers
    }

    pub fn provider(&self, id: &str) -> Option<&ShortenProvider> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Shorten `target` via the service identified by `service_id`.
    ///
    /// The target is validated before any network call; a provider failure
    /// is surfaced as-is, never retried against another provider.
    pub async fn shorten(
        &self,
        client: &reqwest::Client,
        service_id: &str,
        target: &str,
    ) -> Result<Shortened, ShortenError> {
        let provider = self
            .provider(service_id)
            .ok_or_else(|| ShortenError::UnknownService(service_id.to_string()))?;

        let parsed = Url::parse(target.trim()).map_err(|_| ShortenError::BadTarget)?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ShortenError::BadTarget);
        }

        tracing::debug!("Shortening via {}: {}", provider.label, parsed);

        let response = match provider.kind {
            ProviderKind::GdJson => {
                client
                    .get(&provider.endpoint)
                    .query(&[("format", "json"), ("url", parsed.as_str())])
                    .send()
                    .await
            }
            ProviderKind::PlainText => {
                client
                    .get(&provider.endpoint)
                    .query(&[("url", parsed.as_str())])
                    .send()
                    .await
            }
            ProviderKind::CleanUri => {
                client
                    .post(&provider.endpoint)
                    .form(&[("url", parsed.as_str())])
                    .send()
                    .await
            }
        };

        let response = response.map_err(|e| ShortenError::Transport {
            service: provider.label.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ShortenError::Transport {
            service: provider.label.clone(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(ShortenError::Rejected {
                service: provider.label.clone(),
                message: format!("HTTP {}: {}", status.as_u16(), truncate(&body, 200)),
            });
        }

        let short_url = Self::extract_short_url(provider, &body)?;
        Ok(Shortened {
            short_url,
            service: provider.label.clone(),
        })
    }

    /// Validate the response shape for one provider and pull out the URL.
    fn extract_short_url(provider: &ShortenProvider, body: &str) -> Result<String, ShortenError> {
        let service = provider.label.clone();
        match provider.kind {
            ProviderKind::GdJson => {
                let parsed: GdResponse =
                    serde_json::from_str(body).map_err(|e| ShortenError::BadResponse {
                        service: service.clone(),
                        message: e.to_string(),
                    })?;
                if let Some(message) = parsed.errormessage {
                    return Err(ShortenError::Rejected { service, message });
                }
                parsed
                    .shorturl
                    .filter(|u| is_http_url(u))
                    .ok_or(ShortenError::BadResponse {
                        service,
                        message: "missing shorturl field".to_string(),
                    })
            }
            ProviderKind::PlainText => {
                let url = body.trim().to_string();
                if is_http_url(&url) {
                    Ok(url)
                } else {
                    Err(ShortenError::BadResponse {
                        service,
                        message: format!("body is not a URL: {}", truncate(&url, 200)),
                    })
                }
            }
            ProviderKind::CleanUri => {
                let parsed: CleanUriResponse =
                    serde_json::from_str(body).map_err(|e| ShortenError::BadResponse {
                        service: service.clone(),
                        message: e.to_string(),
                    })?;
                if let Some(message) = parsed.error {
                    return Err(ShortenError::Rejected { service, message });
                }
                parsed
                    .result_url
                    .filter(|u| is_http_url(u))
                    .ok_or(ShortenError::BadResponse {
                        service,
                        message: "missing result_url field".to_string(),
                    })
            }
        }
    }
}

fn is_http_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|u| u.scheme() == "http" || u.scheme() == "https")
        .unwrap_or(false)
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(kind: ProviderKind) -> ShortenProvider {
        ShortenProvider {
            id: "test".to_string(),
            label: "test".to_string(),
            endpoint: "http://127.0.0.1:1/unused".to_string(),
            kind,
        }
    }

    #[test]
    fn builtin_has_four_services() {
        let shortener = Shortener::builtin();
        assert_eq!(shortener.providers().len(), 4);
        for id in ["isgd", "vgd", "tinyurl", "cleanuri"] {
            assert!(shortener.provider(id).is_some(), "missing {}", id);
        }
    }

    #[test]
    fn gd_json_shapes() {
        let p = provider(ProviderKind::GdJson);
        let ok = Shortener::extract_short_url(&p, r#"{"shorturl":"https://is.gd/x"}"#).unwrap();
        assert_eq!(ok, "https://is.gd/x");

        let err = Shortener::extract_short_url(&p, r#"{"errorcode":1,"errormessage":"bad url"}"#);
        assert!(matches!(err, Err(ShortenError::Rejected { .. })));

        let err = Shortener::extract_short_url(&p, "<html>");
        assert!(matches!(err, Err(ShortenError::BadResponse { .. })));
    }

    #[test]
    fn plain_text_must_be_a_url() {
        let p = provider(ProviderKind::PlainText);
        let ok = Shortener::extract_short_url(&p, "https://tinyurl.com/abc\n").unwrap();
        assert_eq!(ok, "https://tinyurl.com/abc");

        let err = Shortener::extract_short_url(&p, "Error: invalid URL");
        assert!(matches!(err, Err(ShortenError::BadResponse { .. })));
    }

    #[test]
    fn cleanuri_shapes() {
        let p = provider(ProviderKind::CleanUri);
        let ok =
            Shortener::extract_short_url(&p, r#"{"result_url":"https://cleanuri.com/x"}"#).unwrap();
        assert_eq!(ok, "https://cleanuri.com/x");

        let err = Shortener::extract_short_url(&p, r#"{"error":"URL is invalid"}"#);
        assert!(matches!(err, Err(ShortenError::Rejected { .. })));
    }

    #[tokio::test]
    async fn unknown_service_fails_before_any_request() {
        let shortener = Shortener::builtin();
        let client = reqwest::Client::new();
        let err = shortener
            .shorten(&client, "nope", "https://example.com")
            .await;
        assert!(matches!(err, Err(ShortenError::UnknownService(_))));
    }

    #[tokio::test]
    async fn non_http_target_is_rejected() {
        let shortener = Shortener::builtin();
        let client = reqwest::Client::new();
        for target in ["ftp://example.com/file", "not a url", "javascript:alert(1)"] {
            let err = shortener.shorten(&client, "isgd", target).await;
            assert!(matches!(err, Err(ShortenError::BadTarget)), "{}", target);
        }
    }
}
