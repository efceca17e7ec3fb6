//! Markdown rendering collaborator.
//!
//! The model replies in markdown; the webview gets pre-rendered HTML so the
//! frontend stays a dumb display layer. Pure, no side effects.

use pulldown_cmark::{html, Options, Parser};

/// Render markdown to an HTML fragment.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
