//! IP geolocation proxy.
//!
//! Walks a fixed ordered list of geolocation services. Any transport error,
//! non-success status or unparseable body moves on to the next provider; if
//! every provider fails, a hardcoded placeholder record is returned. There
//! is no backoff and no health tracking.

use serde::{Deserialize, Serialize};

/// Source id reported when the placeholder record is served.
pub const FALLBACK_SOURCE: &str = "fallback";

/// Normalized geolocation record, the single shape every provider response
/// is mapped onto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub org: String,
}

impl GeoRecord {
    /// The placeholder served when every provider is down.
    pub fn fallback() -> Self {
        Self {
            ip: "0.0.0.0".to_string(),
            city: "Unknown".to_string(),
            region: "Unknown".to_string(),
            country: "Unknown".to_string(),
            country_code: "XX".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            timezone: "UTC".to_string(),
            org: "Unknown".to_string(),
        }
    }
}

/// Response-shape family of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoKind {
    /// ipapi.co `/json` shape.
    IpapiCo,
    /// ip-api.com `/json` shape, with its `status` field.
    IpApiCom,
}

/// One geolocation service.
#[derive(Debug, Clone)]
pub struct GeoProvider {
    pub id: String,
    pub endpoint: String,
    pub kind: GeoKind,
}

/// The ordered provider chain behind the lookup endpoint.
#[derive(Debug, Clone)]
pub struct GeoLocator {
    providers: Vec<GeoProvider>,
}

#[derive(Deserialize)]
struct IpapiCoResponse {
    ip: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country_name: Option<String>,
    country_code: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<String>,
    org: Option<String>,
    #[serde(default)]
    error: bool,
}

#[derive(Deserialize)]
struct IpApiComResponse {
    status: String,
    query: Option<String>,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    country: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
}

impl GeoLocator {
    /// Construct with an explicit provider chain. Used by tests to point
    /// providers at a local mock server.
    pub fn new(providers: Vec<GeoProvider>) -> Self {
        Self { providers }
    }

    /// The two public services tried in order.
    pub fn builtin() -> Self {
        Self::new(vec![
            GeoProvider {
                id: "ipapi.co".to_string(),
                endpoint: "https://ipapi.co/json/".to_string(),
                kind: GeoKind::IpapiCo,
            },
            GeoProvider {
                id: "ip-api.com".to_string(),
                endpoint: "http://ip-api.com/json".to_string(),
                kind: GeoKind::IpApiCom,
            },
        ])
    }

    pub fn providers(&self) -> &[GeoProvider] {
        &self.providers
    }

    /// Try each provider in order; return the first normalized record and
    /// the id of the provider that produced it, or the fallback record with
    /// [`FALLBACK_SOURCE`] when all providers fail.
    pub async fn lookup(&self, client: &reqwest::Client) -> (GeoRecord, String) {
        for provider in &self.providers {
            match Self::query(client, provider).await {
                Ok(record) => {
                    tracing::debug!("Geolocation served by {}", provider.id);
                    return (record, provider.id.clone());
                }
                Err(e) => {
                    tracing::warn!("Geolocation provider {} failed: {}", provider.id, e);
                }
            }
        }

        tracing::warn!("All geolocation providers failed, serving fallback record");
        (GeoRecord::fallback(), FALLBACK_SOURCE.to_string())
    }

    async fn query(
        client: &reqwest::Client,
        provider: &GeoProvider,
    ) -> Result<GeoRecord, anyhow::Error> {
        let response = client.get(&provider.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {}", status.as_u16());
        }
        let body = response.text().await?;
        Self::normalize(provider.kind, &body)
    }

    /// Map one provider's body onto the normalized record.
    fn normalize(kind: GeoKind, body: &str) -> Result<GeoRecord, anyhow::Error> {
        match kind {
            GeoKind::IpapiCo => {
                let parsed: IpapiCoResponse = serde_json::from_str(body)?;
                if parsed.error {
                    anyhow::bail!("provider reported an error body");
                }
                let ip = parsed
                    .ip
                    .ok_or_else(|| anyhow::anyhow!("missing ip field"))?;
                Ok(GeoRecord {
                    ip,
                    city: parsed.city.unwrap_or_default(),
                    region: parsed.region.unwrap_or_default(),
                    country: parsed.country_name.unwrap_or_default(),
                    country_code: parsed.country_code.unwrap_or_default(),
                    latitude: parsed.latitude.unwrap_or(0.0),
                    longitude: parsed.longitude.unwrap_or(0.0),
                    timezone: parsed.timezone.unwrap_or_default(),
                    org: parsed.org.unwrap_or_default(),
                })
            }
            GeoKind::IpApiCom => {
                let parsed: IpApiComResponse = serde_json::from_str(body)?;
                if parsed.status != "success" {
                    anyhow::bail!("provider status was {:?}", parsed.status);
                }
                let ip = parsed
                    .query
                    .ok_or_else(|| anyhow::anyhow!("missing query field"))?;
                Ok(GeoRecord {
                    ip,
                    city: parsed.city.unwrap_or_default(),
                    region: parsed.region_name.unwrap_or_default(),
                    country: parsed.country.unwrap_or_default(),
                    country_code: parsed.country_code.unwrap_or_default(),
                    latitude: parsed.lat.unwrap_or(0.0),
                    longitude: parsed.lon.unwrap_or(0.0),
                    timezone: parsed.timezone.unwrap_or_default(),
                    org: parsed.isp.unwrap_or_default(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_chain_is_ordered() {
        let locator = GeoLocator::builtin();
        let ids: Vec<&str> = locator.providers().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["ipapi.co", "ip-api.com"]);
        assert_eq!(locator.providers()[0].kind, GeoKind::IpapiCo);
        assert_eq!(locator.providers()[1].kind, GeoKind::IpApiCom);
    }

    #[test]
    fn normalizes_ipapi_co() {
        let body = r#"{
            "ip": "203.0.113.9",
            "city": "Berlin",
            "region": "Berlin",
            "country_name": "Germany",
            "country_code": "DE",
            "latitude": 52.52,
            "longitude": 13.40,
            "timezone": "Europe/Berlin",
            "org": "Example AG"
        }"#;
        let record = GeoLocator::normalize(GeoKind::IpapiCo, body).unwrap();
        assert_eq!(record.ip, "203.0.113.9");
        assert_eq!(record.country_code, "DE");
        assert_eq!(record.org, "Example AG");
    }

    #[test]
    fn ipapi_co_error_body_is_a_failure() {
        let body = r#"{"error": true, "reason": "RateLimited"}"#;
        assert!(GeoLocator::normalize(GeoKind::IpapiCo, body).is_err());
    }

    #[test]
    fn normalizes_ip_api_com() {
        let body = r#"{
            "status": "success",
            "query": "203.0.113.9",
            "city": "Berlin",
            "regionName": "Berlin",
            "country": "Germany",
            "countryCode": "DE",
            "lat": 52.52,
            "lon": 13.40,
            "timezone": "Europe/Berlin",
            "isp": "Example AG"
        }"#;
        let record = GeoLocator::normalize(GeoKind::IpApiCom, body).unwrap();
        assert_eq!(record.region, "Berlin");
        assert_eq!(record.latitude, 52.52);
    }

    #[test]
    fn ip_api_com_fail_status_is_a_failure() {
        let body = r#"{"status": "fail", "message": "private range"}"#;
        assert!(GeoLocator::normalize(GeoKind::IpApiCom, body).is_err());
    }

    #[tokio::test]
    async fn unreachable_chain_serves_fallback() {
        // Port 1 refuses connections immediately.
        let locator = GeoLocator::new(vec![
            GeoProvider {
                id: "a".to_string(),
                endpoint: "http://127.0.0.1:1/json".to_string(),
                kind: GeoKind::IpapiCo,
            },
            GeoProvider {
                id: "b".to_string(),
                endpoint: "http://127.0.0.1:1/json".to_string(),
                kind: GeoKind::IpApiCom,
            },
        ]);
        let client = reqwest::Client::new();
        let (record, source) = locator.lookup(&client).await;
        assert_eq!(source, FALLBACK_SOURCE);
        assert_eq!(record, GeoRecord::fallback());
    }
}
