//! CLI commands

pub mod list;
pub mod related;
pub mod show;

use std::io::Write;

use anyhow::Result;

use crate::content::Document;
use crate::helpers::short_date;

/// One line per document: date, title, key and read time
fn write_document_lines<'a, W, I>(out: &mut W, docs: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Document>,
{
    for doc in docs {
        writeln!(
            out,
            "  {} - {} [{}] ({})",
            short_date(&doc.published_at),
            doc.title,
            doc.key,
            doc.read_time
        )?;
    }
    Ok(())
}
