//! Derived document fields: read time and default cover image

use std::collections::HashMap;

use crate::config::{CoverImageConfig, SiteConfig, DEFAULT_COVER_IMAGE};

/// Reading speed used when none is configured
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Estimate the reading time of a markdown body, e.g. "3 min read".
///
/// Never less than one minute.
pub fn read_time(body: &str, words_per_minute: usize) -> String {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(wpm).max(1);
    format!("{} min read", minutes)
}

/// Category to cover image table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImages {
    default: String,
    by_category: HashMap<String, String>,
}

impl CoverImages {
    /// Blank paths are ignored: a blank default falls back to
    /// [`DEFAULT_COVER_IMAGE`] and blank category entries are dropped.
    pub fn new(default: impl Into<String>, by_category: HashMap<String, String>) -> Self {
        let default = default.into();
        let default = if default.trim().is_empty() {
            DEFAULT_COVER_IMAGE.to_string()
        } else {
            default
        };
        let by_category = by_category
            .into_iter()
            .filter(|(_, image)| !image.trim().is_empty())
            .collect();

        Self {
            default,
            by_category,
        }
    }

    /// Image for a document whose first category is `category`
    pub fn lookup(&self, category: Option<&str>) -> &str {
        category
            .and_then(|c| self.by_category.get(c))
            .map(String::as_str)
            .unwrap_or(self.default.as_str())
    }
}

impl Default for CoverImages {
    fn default() -> Self {
        CoverImageConfig::default().into()
    }
}

impl From<CoverImageConfig> for CoverImages {
    fn from(config: CoverImageConfig) -> Self {
        Self::new(config.default, config.categories)
    }
}

/// Settings that fill in fields a document leaves out
#[derive(Debug, Clone, Default)]
pub struct DerivationSettings {
    pub words_per_minute: usize,
    pub cover_images: CoverImages,
}

impl DerivationSettings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            words_per_minute: config.words_per_minute,
            cover_images: config.cover_images.clone().into(),
        }
    }
}
