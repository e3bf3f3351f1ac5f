//! Article body rendering.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// Render an article's markdown body to HTML for `inner_html`.
///
/// Raw HTML blocks are dropped, and link or image destinations with a scheme
/// other than `http`, `https`, or `mailto` are replaced with `#`.
pub fn render_article_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        })),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        })),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_destination(&dest) { dest } else { CowStr::Borrowed("#") }
}

/// Relative paths, fragments, and the allowed schemes pass. Browsers ignore
/// ASCII whitespace and control characters inside a scheme, so those are
/// removed before the check.
pub(crate) fn is_safe_destination(dest: &str) -> bool {
    let cleaned: String = dest
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();
    match cleaned.find([':', '/', '?', '#']) {
        Some(end) if cleaned[end..].starts_with(':') => matches!(&cleaned[..end], "http" | "https" | "mailto"),
        _ => true,
    }
}
