//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name shown by `serve`
    pub title: String,

    // Content
    /// Directory holding the blog documents, relative to the site root
    pub content_dir: String,
    /// Descend into sub-directories of `content_dir`
    pub recursive: bool,

    // Derivation
    pub words_per_minute: usize,
    #[serde(default)]
    pub cover_images: CoverImageConfig,

    // Listing
    #[serde(default)]
    pub listing: ListingConfig,
    pub related_limit: usize,
    pub recent_limit: usize,

    // Server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),

            content_dir: "content/blog".to_string(),
            recursive: false,

            words_per_minute: 200,
            cover_images: CoverImageConfig::default(),

            listing: ListingConfig::default(),
            related_limit: 2,
            recent_limit: 3,

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }
}

/// Cover image used when neither the document nor its category names one
pub const DEFAULT_COVER_IMAGE: &str = "/images/blog/default.jpg";

/// Cover images used when a document does not name one
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverImageConfig {
    /// Fallback image when the first category has no entry
    pub default: String,
    /// Image per category name
    pub categories: HashMap<String, String>,
}

impl Default for CoverImageConfig {
    fn default() -> Self {
        let categories = [
            ("React", "/images/blog/react.jpg"),
            ("JavaScript", "/images/blog/javascript.jpg"),
            ("TypeScript", "/images/blog/typescript.jpg"),
            ("Node.js", "/images/blog/nodejs.jpg"),
            ("CSS", "/images/blog/css.jpg"),
            ("Next.js", "/images/blog/nextjs.jpg"),
            ("Web Development", "/images/blog/webdev.jpg"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            default: DEFAULT_COVER_IMAGE.to_string(),
            categories,
        }
    }
}

/// Blog listing window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Documents shown before "load more"
    pub initial: usize,
    /// Documents added by each "load more"
    pub step: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            initial: 6,
            step: 3,
        }
    }
}

/// Query server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Portfolio");
        assert_eq!(config.content_dir, "content/blog");
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.related_limit, 2);
        assert_eq!(config.listing.initial, 6);
        assert_eq!(config.listing.step, 3);
        assert_eq!(
            config.cover_images.categories.get("Node.js").map(String::as_str),
            Some("/images/blog/nodejs.jpg")
        );
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
content_dir: posts
words_per_minute: 250
cover_images:
  default: /img/fallback.png
  categories:
    Rust: /img/rust.png
listing:
  initial: 4
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.content_dir, "posts");
        assert_eq!(config.words_per_minute, 250);
        assert_eq!(config.cover_images.default, "/img/fallback.png");
        assert_eq!(config.cover_images.categories.len(), 1);
        assert_eq!(config.listing.initial, 4);
        assert_eq!(config.listing.step, 3);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "localhost");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SiteConfig::load(dir.path().join("_config.yml")).is_err());
    }
}
