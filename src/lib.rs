//! # toolbelt
//!
//! API backend for a collection of independent, single-purpose web utility
//! tools.
//!
//! This library provides:
//! - Pure transforms behind each tool page (formatting, codecs, hashing,
//!   color and timestamp conversion, generators, a calculator)
//! - Two thin proxies over third-party APIs: URL shortening and IP
//!   geolocation with a static fallback record
//! - A tool metadata catalog that drives navigation and the sitemap
//!
//! ## Request Flow
//! 1. Browser calls an `/api/...` endpoint
//! 2. Transforms run locally; proxies call exactly one external API at a
//!    time until one succeeds or the list is exhausted
//! 3. The response is normalized, or replaced with a static fallback
//!
//! ## Modules
//! - `catalog`: tool metadata and sitemap generation
//! - `tools`: the pure transforms
//! - `proxy`: shortening and geolocation provider plumbing
//! - `api`: axum routes and handlers

pub mod api;
pub mod catalog;
pub mod config;
pub mod proxy;
pub mod tools;

pub use catalog::Catalog;
pub use config::Config;
