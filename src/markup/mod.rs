mod highlight;
mod sanitize;

pub use highlight::{highlight, ERA_CODES};
pub use sanitize::{sanitize, BREAK_MARKER};

/// Turn a raw dictionary description into display HTML. Untrusted markup is
/// sanitized first so that the era-code annotations added afterwards are the
/// only markup that did not pass the allow-list.
pub fn render_description(raw: &str) -> String {
    highlight(&sanitize(raw))
}

/// Text content of an HTML fragment, for terminal output.
pub fn plain_text(html: &str) -> String {
    scraper::Html::parse_fragment(html)
        .root_element()
        .text()
        .collect()
}
