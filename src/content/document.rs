//! Blog document model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identifier taken from the `id` front-matter field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(i64),
    Text(String),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Number(n) => write!(f, "{}", n),
            DocumentId::Text(s) => f.write_str(s),
        }
    }
}

/// A blog document loaded from a markdown file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Front-matter id, or the key when none was given
    pub id: DocumentId,

    /// Stable identifier derived from the file name, used for lookup and routing
    pub key: String,

    pub title: String,

    pub excerpt: String,

    /// Publication date, the collection is ordered by it
    #[serde(rename = "date")]
    pub published_at: DateTime<Local>,

    pub categories: Vec<String>,

    /// Raw markdown after the front-matter
    #[serde(rename = "content")]
    pub body: String,

    /// Explicit or derived from the first category
    pub cover_image: String,

    /// Explicit or estimated from the body
    pub read_time: String,

    /// Full source file path
    #[serde(skip)]
    pub source: PathBuf,
}

impl Document {
    /// Whether the document is filed under `category`
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Whether the two documents have at least one category in common
    pub fn shares_category_with(&self, other: &Document) -> bool {
        self.categories.iter().any(|c| other.has_category(c))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    /// Build a document without touching the file system
    pub fn doc(key: &str, date: (i32, u32, u32), categories: &[&str]) -> Document {
        Document {
            id: DocumentId::Text(key.to_string()),
            key: key.to_string(),
            title: format!("Title {}", key),
            excerpt: format!("Excerpt {}", key),
            published_at: Local
                .with_ymd_and_hms(date.0, date.1, date.2, 0, 0, 0)
                .unwrap(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            body: String::new(),
            cover_image: "/images/blog/default.jpg".to_string(),
            read_time: "1 min read".to_string(),
            source: PathBuf::from(format!("{}.md", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::doc;
    use super::*;

    #[test]
    fn test_shares_category() {
        let a = doc("a", (2024, 1, 1), &["React"]);
        let b = doc("b", (2024, 3, 1), &["React", "CSS"]);
        let c = doc("c", (2024, 2, 1), &[]);
        assert!(a.shares_category_with(&b));
        assert!(!a.shares_category_with(&c));
        assert!(!c.shares_category_with(&c));
    }

    #[test]
    fn test_serializes_with_site_field_names() {
        let mut d = doc("hello", (2024, 1, 1), &["React"]);
        d.id = DocumentId::Number(3);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["key"], "hello");
        assert_eq!(json["readTime"], "1 min read");
        assert_eq!(json["coverImage"], "/images/blog/default.jpg");
        assert!(json.get("date").is_some());
        assert!(json.get("content").is_some());
        assert!(json.get("source").is_none());
    }
}
