//! List posts related to a given post

use anyhow::Result;
use std::io::{self, Write};

use super::write_document_lines;
use crate::content::query;
use crate::Folio;

/// Print up to `limit` posts sharing a category with `key`
pub fn run(folio: &Folio, key: &str, limit: usize) -> Result<()> {
    let mut out = io::stdout().lock();
    write(folio, key, limit, &mut out)
}

/// Write the related posts to `out`; an unknown key is an error
pub fn write<W: Write>(folio: &Folio, key: &str, limit: usize, out: &mut W) -> Result<()> {
    let docs = folio.load_all()?;
    let Some(doc) = docs.iter().find(|d| d.key == key) else {
        anyhow::bail!("Post not found: {}", key);
    };

    let related = query::find_related(doc, &docs, limit);
    writeln!(out, "Related to {} ({}):", doc.key, related.len())?;
    write_document_lines(out, related)?;

    Ok(())
}
