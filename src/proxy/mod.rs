//! Thin proxies over third-party provider APIs.
//!
//! Two proxies exist: URL shortening (one provider per request, chosen by
//! id, no retry across providers) and IP geolocation (ordered provider list
//! scanned until one answers, with a static fallback record when none does).
//! Neither caches, rate-limits, nor tracks provider health.

pub mod geoip;
pub mod shortener;
