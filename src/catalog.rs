//! Tool metadata registry.
//!
//! The catalog is a static list of every tool the site offers, built once at
//! startup and held in memory for the lifetime of the process. It drives the
//! navigation endpoint and the sitemap. The only invariant is slug
//! uniqueness; duplicate slugs abort startup.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tool category, used to group entries in navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Formatters,
    Codecs,
    Crypto,
    Converters,
    Generators,
    Network,
    Media,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formatters => "formatters",
            Self::Codecs => "codecs",
            Self::Crypto => "crypto",
            Self::Converters => "converters",
            Self::Generators => "generators",
            Self::Network => "network",
            Self::Media => "media",
        }
    }
}

/// Metadata for a single tool page.
#[derive(Debug, Clone, Serialize)]
pub struct ToolEntry {
    /// URL slug, unique across the catalog.
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Icon identifier consumed by the frontend.
    pub icon: &'static str,
    pub category: Category,
}

/// In-memory tool catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ToolEntry>,
}

impl Catalog {
    /// Build a catalog from a list of entries, enforcing slug uniqueness.
    pub fn new(entries: Vec<ToolEntry>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.slug) {
                anyhow::bail!("duplicate tool slug in catalog: {}", entry.slug);
            }
        }
        Ok(Self { entries })
    }

    /// The full built-in tool list.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::new(vec![
            ToolEntry {
                slug: "json-formatter",
                title: "JSON Formatter",
                description: "Format, minify and validate JSON documents",
                icon: "braces",
                category: Category::Formatters,
            },
            ToolEntry {
                slug: "base64",
                title: "Base64 Encoder/Decoder",
                description: "Encode and decode Base64 text, standard or URL-safe",
                icon: "binary",
                category: Category::Codecs,
            },
            ToolEntry {
                slug: "url-codec",
                title: "URL Encoder/Decoder",
                description: "Percent-encode or decode URL components and inspect URL parts",
                icon: "link",
                category: Category::Codecs,
            },
            ToolEntry {
                slug: "hash-calculator",
                title: "Hash Calculator",
                description: "Compute MD5, SHA-256 and SHA-512 digests of text",
                icon: "fingerprint",
                category: Category::Crypto,
            },
            ToolEntry {
                slug: "color-converter",
                title: "Color Converter",
                description: "Convert colors between HEX, RGB and HSL",
                icon: "palette",
                category: Category::Converters,
            },
            ToolEntry {
                slug: "calculator",
                title: "Calculator",
                description: "Evaluate arithmetic expressions",
                icon: "calculator",
                category: Category::Converters,
            },
            ToolEntry {
                slug: "uuid-generator",
                title: "UUID Generator",
                description: "Generate random version 4 UUIDs",
                icon: "hash",
                category: Category::Generators,
            },
            ToolEntry {
                slug: "random-string",
                title: "Random String Generator",
                description: "Generate random strings and passwords",
                icon: "shuffle",
                category: Category::Generators,
            },
            ToolEntry {
                slug: "timestamp-converter",
                title: "Timestamp Converter",
                description: "Convert between Unix timestamps and RFC 3339 dates",
                icon: "clock",
                category: Category::Converters,
            },
            ToolEntry {
                slug: "url-shortener",
                title: "URL Shortener",
                description: "Shorten long URLs via public shortening services",
                icon: "scissors",
                category: Category::Network,
            },
            ToolEntry {
                slug: "ip-lookup",
                title: "IP Lookup",
                description: "Look up your public IP address and its geolocation",
                icon: "globe",
                category: Category::Network,
            },
            // Client-side only tools. Listed for navigation and the sitemap;
            // the server exposes no transform for them.
            ToolEntry {
                slug: "qr-code",
                title: "QR Code Generator",
                description: "Render QR codes from text in the browser",
                icon: "qr-code",
                category: Category::Media,
            },
            ToolEntry {
                slug: "image-compressor",
                title: "Image Compressor",
                description: "Resize and compress images in the browser",
                icon: "image",
                category: Category::Media,
            },
        ])
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }

    /// Look up a single entry by slug.
    pub fn get(&self, slug: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// Entries belonging to one category.
    pub fn by_category(&self, category: Category) -> Vec<&ToolEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Render the sitemap as XML, one `<url>` per tool page.
    pub fn sitemap_xml(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
        xml.push_str(&format!("  <url><loc>{}/</loc></url>\n", base));
        for entry in &self.entries {
            xml.push_str(&format!(
                "  <url><loc>{}/tools/{}</loc></url>\n",
                base, entry.slug
            ));
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_unique_slugs() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.entries().is_empty());
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let dup = ToolEntry {
            slug: "base64",
            title: "Base64",
            description: "dup",
            icon: "binary",
            category: Category::Codecs,
        };
        let result = Catalog::new(vec![dup.clone(), dup]);
        assert!(result.is_err());
    }

    #[test]
    fn category_filter_selects_the_network_tools() {
        let catalog = Catalog::builtin().unwrap();
        let network = catalog.by_category(Category::Network);
        let slugs: Vec<&str> = network.iter().map(|e| e.slug).collect();
        assert_eq!(slugs, vec!["url-shortener", "ip-lookup"]);
        assert!(network.iter().all(|e| e.category == Category::Network));
    }

    #[test]
    fn category_wire_name_matches_as_str() {
        for category in [
            Category::Formatters,
            Category::Codecs,
            Category::Crypto,
            Category::Converters,
            Category::Generators,
            Category::Network,
            Category::Media,
        ] {
            let wire = serde_json::to_value(category).unwrap();
            assert_eq!(wire, serde_json::Value::String(category.as_str().to_string()));
        }
    }

    #[test]
    fn lookup_by_slug() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get("json-formatter").is_some());
        assert!(catalog.get("missing-tool").is_none());
    }

    #[test]
    fn sitemap_lists_every_tool() {
        let catalog = Catalog::builtin().unwrap();
        let xml = catalog.sitemap_xml("https://tools.example.com/");
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://tools.example.com/</loc>"));
        for entry in catalog.entries() {
            assert!(xml.contains(&format!("/tools/{}</loc>", entry.slug)));
        }
    }
}
