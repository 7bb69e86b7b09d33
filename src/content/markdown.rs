//! Markdown rendering for document bodies

use pulldown_cmark::{html, Options, Parser};

/// Render a markdown body to HTML.
///
/// Front-matter is stripped by the loader, so YAML metadata blocks are not
/// enabled here.
pub fn render_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES;
    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}
