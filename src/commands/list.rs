//! List site content

use anyhow::Result;
use std::collections::BTreeMap;
use std::io::{self, Write};

use super::write_document_lines;
use crate::content::{query, Document};
use crate::Folio;

/// Filters and output format for `folio list`
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub category: Option<String>,
    pub query: Option<String>,
    pub json: bool,
}

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, options: &ListOptions) -> Result<()> {
    let mut out = io::stdout().lock();
    write(folio, content_type, options, &mut out)
}

/// Write the listing to `out`
pub fn write<W: Write>(
    folio: &Folio,
    content_type: &str,
    options: &ListOptions,
    out: &mut W,
) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let docs = folio.load_all()?;
            let text = options.query.as_deref().unwrap_or("");
            let docs: Vec<&Document> = query::filter_by_query(&docs, text)
                .into_iter()
                .filter(|doc| {
                    options
                        .category
                        .as_deref()
                        .map_or(true, |category| doc.has_category(category))
                })
                .collect();

            if options.json {
                serde_json::to_writer_pretty(&mut *out, &docs)?;
                writeln!(out)?;
            } else {
                writeln!(out, "Posts ({}):", docs.len())?;
                write_document_lines(out, docs)?;
            }
        }
        "category" | "categories" => {
            let docs = folio.load_all()?;
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for cat in docs.iter().flat_map(|doc| doc.categories.iter()) {
                *counts.entry(cat.as_str()).or_insert(0) += 1;
            }

            if options.json {
                let names: Vec<&str> = counts.keys().copied().collect();
                serde_json::to_writer_pretty(&mut *out, &names)?;
                writeln!(out)?;
            } else {
                writeln!(out, "Categories ({}):", counts.len())?;
                for (cat, count) in counts {
                    writeln!(out, "  {} ({})", cat, count)?;
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }

    Ok(())
}
