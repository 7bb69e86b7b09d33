//! Content module - loads blog documents and answers queries over them

pub mod cache;
pub mod derive;
mod document;
mod error;
mod frontmatter;
pub mod loader;
pub mod markdown;
pub mod query;

pub use cache::ContentCache;
pub use derive::{CoverImages, DerivationSettings};
pub use document::{Document, DocumentId};
pub use error::ContentError;
pub use frontmatter::{FrontMatter, FrontMatterError};
pub use loader::ContentLoader;
pub use query::{ListQuery, ListView};
