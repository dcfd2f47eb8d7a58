use scraper::{node::Node, ElementRef, Html};

/// Line-break marker embedded in raw descriptions.
pub const BREAK_MARKER: &str = "<br>";

const ALLOWED_TAGS: [&str; 5] = ["b", "i", "em", "strong", "a"];
const ALLOWED_ATTRS: [&str; 2] = ["href", "class"];

// Elements dropped together with everything inside them.
const DROPPED_TAGS: [&str; 11] = [
    "script", "style", "iframe", "object", "embed", "template", "noscript", "svg", "math",
    "textarea", "title",
];

const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Strip break markers and reduce a description to the inline formatting
/// allow-list. Disallowed tags are unwrapped (their text is kept), except for
/// script-like elements which are dropped whole. Comments and any attribute
/// outside the allow-list are removed.
pub fn sanitize(raw: &str) -> String {
    let stripped = raw.replace(BREAK_MARKER, "");
    let doc = Html::parse_fragment(&stripped);

    let mut out = String::with_capacity(stripped.len());
    write_children(doc.root_element(), &mut out);
    out
}

fn write_children(parent: ElementRef<'_>, out: &mut String) {
    for child in parent.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&tera::escape_html(text)),

            Node::Element(el) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };

                let name = el.name();
                if DROPPED_TAGS.contains(&name) {
                    continue;
                }
                if !ALLOWED_TAGS.contains(&name) {
                    write_children(child, out);
                    continue;
                }

                out.push('<');
                out.push_str(name);
                for (key, val) in el.attrs() {
                    if !ALLOWED_ATTRS.contains(&key) {
                        continue;
                    }
                    if key == "href" && !is_safe_url(val) {
                        continue;
                    }
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    out.push_str(&tera::escape_html(val));
                    out.push('"');
                }
                out.push('>');

                write_children(child, out);

                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }

            // Comments, doctypes, processing instructions.
            _ => {}
        }
    }
}

/// Reject script-capable URL schemes. Browsers ignore embedded whitespace and
/// control characters in the scheme, so those are removed before comparing.
fn is_safe_url(url: &str) -> bool {
    let scheme: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_lowercase();

    !UNSAFE_SCHEMES.iter().any(|s| scheme.starts_with(s))
}
