//! Show a single post

use anyhow::Result;
use std::io::{self, Write};

use crate::content::{markdown, Document};
use crate::helpers::format_blog_date;
use crate::Folio;

/// Print the post with the given key
pub fn run(folio: &Folio, key: &str, html: bool, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    write(folio, key, html, json, &mut out)
}

/// Write the post with the given key to `out`; an unknown key is an error
pub fn write<W: Write>(folio: &Folio, key: &str, html: bool, json: bool, out: &mut W) -> Result<()> {
    let Some(doc) = folio.load_by_key(key)? else {
        anyhow::bail!("Post not found: {}", key);
    };

    if json {
        let mut value = serde_json::to_value(&doc)?;
        if html {
            value["html"] = serde_json::Value::String(markdown::render_html(&doc.body));
        }
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
        return Ok(());
    }

    write_header(&doc, out)?;
    writeln!(out)?;
    if html {
        write!(out, "{}", markdown::render_html(&doc.body))?;
    } else {
        write!(out, "{}", doc.body)?;
    }

    Ok(())
}

fn write_header<W: Write>(doc: &Document, out: &mut W) -> Result<()> {
    writeln!(out, "{}", doc.title)?;
    writeln!(
        out,
        "{} · {}",
        format_blog_date(&doc.published_at),
        doc.read_time
    )?;
    if !doc.categories.is_empty() {
        writeln!(out, "Categories: {}", doc.categories.join(", "))?;
    }
    writeln!(out, "Cover: {}", doc.cover_image)?;
    writeln!(out, "{}", doc.excerpt)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> (TempDir, Folio) {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content/blog");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("hooks.md"),
            "---\ntitle: React Hooks\ndate: 2024-01-05\nexcerpt: All about hooks\ncategories: [React]\n---\n# Hooks\n\nUse them.\n",
        )
        .unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        (dir, folio)
    }

    fn output(folio: &Folio, key: &str, html: bool, json: bool) -> Result<String> {
        let mut buf = Vec::new();
        write(folio, key, html, json, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_show_plain() {
        let (_dir, folio) = site();
        let out = output(&folio, "hooks", false, false).unwrap();
        assert!(out.starts_with("React Hooks\nJan 5, 2024 · 1 min read\n"));
        assert!(out.contains("Categories: React\n"));
        assert!(out.contains("Cover: /images/blog/react.jpg\n"));
        assert!(out.ends_with("# Hooks\n\nUse them.\n"));
    }

    #[test]
    fn test_show_html() {
        let (_dir, folio) = site();
        let out = output(&folio, "hooks", true, false).unwrap();
        assert!(out.contains("<h1>Hooks</h1>"));
    }

    #[test]
    fn test_show_json() {
        let (_dir, folio) = site();
        let out = output(&folio, "hooks", true, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["key"], "hooks");
        assert_eq!(value["readTime"], "1 min read");
        assert!(value["html"].as_str().unwrap().contains("<p>Use them.</p>"));
    }

    #[test]
    fn test_show_missing_post() {
        let (_dir, folio) = site();
        let err = output(&folio, "nope", false, false).unwrap_err();
        assert_eq!(err.to_string(), "Post not found: nope");
    }
}
