//! folio: the content pipeline behind a personal portfolio and blog
//!
//! Blog posts live as markdown files with YAML front-matter in a content
//! directory. This crate loads them into an ordered collection, fills in
//! derived fields and answers the queries the site's pages need.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::Path;

use content::{ContentError, ContentLoader, Document};

/// A portfolio site rooted at a directory
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Blog content directory
    pub content_dir: std::path::PathBuf,
}

impl Folio {
    /// Open a site, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);

        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Loader for this site's content directory
    pub fn loader(&self) -> ContentLoader {
        ContentLoader::from_site(self)
    }

    /// All documents, newest first
    pub fn load_all(&self) -> Result<Vec<Document>, ContentError> {
        self.loader().load_all()
    }

    /// The document with the given key
    pub fn load_by_key(&self, key: &str) -> Result<Option<Document>, ContentError> {
        self.loader().load_by_key(key)
    }

    /// All categories in use, sorted
    pub fn list_categories(&self) -> Result<Vec<String>, ContentError> {
        self.loader().list_categories()
    }
}
