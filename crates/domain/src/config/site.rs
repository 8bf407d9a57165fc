use serde::{Deserialize, Serialize};

/// Public site identity, used when rendering meta tags into the SPA entry
/// document. Opaque to the cache core.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Absolute origin used in `og:url` (default: "https://getserve.rs")
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Site title suffix (default: "getServe.rs")
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            title: default_title(),
        }
    }
}

fn default_domain() -> String {
    "https://getserve.rs".to_string()
}

fn default_title() -> String {
    "getServe.rs".to_string()
}
