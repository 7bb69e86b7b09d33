//! Content loader - reads blog documents from the content directory

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::derive::{self, DerivationSettings};
use super::{query, ContentError, Document, DocumentId, FrontMatter};
use crate::Folio;

/// Loads documents from a content directory.
///
/// Every call reads the directory afresh; nothing is kept between calls.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    content_dir: PathBuf,
    recursive: bool,
    settings: DerivationSettings,
}

impl ContentLoader {
    /// Create a loader for `content_dir`
    pub fn new(content_dir: impl Into<PathBuf>, settings: DerivationSettings) -> Self {
        Self {
            content_dir: content_dir.into(),
            recursive: false,
            settings,
        }
    }

    /// Create a loader configured from the site
    pub fn from_site(folio: &Folio) -> Self {
        Self::new(
            folio.content_dir.clone(),
            DerivationSettings::from_config(&folio.config),
        )
        .recursive(folio.config.recursive)
    }

    /// Also load documents from sub-directories
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Load every document, newest first.
    ///
    /// Documents published at the same instant keep file name order. The
    /// first malformed document aborts the whole load.
    pub fn load_all(&self) -> Result<Vec<Document>, ContentError> {
        let mut docs = Vec::new();
        let mut seen = HashSet::new();

        for path in self.document_paths()? {
            let doc = self.load_document(&path)?;
            if !seen.insert(doc.key.clone()) {
                tracing::warn!(
                    "Skipping {:?}: key '{}' is already used by an earlier document",
                    path,
                    doc.key
                );
                continue;
            }
            docs.push(doc);
        }

        // Stable sort, ties stay in enumeration order
        docs.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        tracing::debug!("Loaded {} documents from {:?}", docs.len(), self.content_dir);
        Ok(docs)
    }

    /// Load the document with the given key, `None` when there is none
    pub fn load_by_key(&self, key: &str) -> Result<Option<Document>, ContentError> {
        let key = key.trim();
        if key.is_empty() {
            return Ok(None);
        }

        Ok(self.load_all()?.into_iter().find(|doc| doc.key == key))
    }

    /// All categories in use, sorted and de-duplicated
    pub fn list_categories(&self) -> Result<Vec<String>, ContentError> {
        Ok(query::collect_categories(&self.load_all()?))
    }

    /// Markdown files in the content directory, in file name order
    pub(crate) fn document_paths(&self) -> Result<Vec<PathBuf>, ContentError> {
        if !self.content_dir.is_dir() {
            return Err(ContentError::DirectoryNotFound(self.content_dir.clone()));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.content_dir)
            .max_depth(max_depth)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.content_dir.clone());
                ContentError::io(path, e.into())
            })?;

            if entry.file_type().is_file() && is_markdown_file(entry.path()) {
                paths.push(entry.into_path());
            }
        }

        Ok(paths)
    }

    /// Load a single document from a file
    fn load_document(&self, path: &Path) -> Result<Document, ContentError> {
        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let (fm, body) =
            FrontMatter::parse(&content).map_err(|e| ContentError::malformed(path, e.to_string()))?;

        let key = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::malformed(path, "file name is not valid UTF-8"))?
            .to_string();

        let categories = fm.categories();
        let date = required(path, fm.date.as_deref(), "date")?;
        let published_at = fm
            .parse_date()
            .ok_or_else(|| ContentError::malformed(path, format!("invalid date '{}'", date)))?;
        let title = required(path, fm.title.as_deref(), "title")?.to_string();
        let excerpt = required(path, fm.excerpt.as_deref(), "excerpt")?.to_string();

        let read_time = fm
            .read_time
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| derive::read_time(body, self.settings.words_per_minute));

        let cover_image = fm
            .cover_image
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| {
                self.settings
                    .cover_images
                    .lookup(categories.first().map(String::as_str))
                    .to_string()
            });

        let id = fm.id.unwrap_or_else(|| DocumentId::Text(key.clone()));

        tracing::debug!("Loaded document '{}' from {:?}", key, path);

        Ok(Document {
            id,
            key,
            title,
            excerpt,
            published_at,
            categories,
            body: body.to_string(),
            cover_image,
            read_time,
            source: path.to_path_buf(),
        })
    }
}

/// Check if a file is a markdown document
fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}

/// A front-matter field that must be present and non-blank
fn required<'a>(
    path: &Path,
    value: Option<&'a str>,
    field: &str,
) -> Result<&'a str, ContentError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ContentError::malformed(path, format!("missing required field '{}'", field)))
}
