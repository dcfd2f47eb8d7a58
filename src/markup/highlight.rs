use lazy_static::lazy_static;
use regex::Regex;

/// Two-digit era codes used in descriptions and the language variant each stands for.
pub const ERA_CODES: [(&str, &str); 15] = [
    ("01", "Ön Türkçe"),
    ("02", "Moğolca"),
    ("03", "Eski Anadolu Türkçesi"),
    ("04", "Osmanlı Türkçesi"),
    ("05", "Türkiye Türkçesi"),
    ("06", "Azerbaycan Türkçesi"),
    ("07", "Kırgız Türkçesi"),
    ("08", "Başkurt Türkçesi"),
    ("09", "Kazak Türkçesi"),
    ("10", "Kırgız Türkçesi"),
    ("11", "Özbek Türkçesi"),
    ("12", "Tatar Türkçesi"),
    ("13", "Türkmen Türkçesi"),
    ("14", "Uygur Türkçesi"),
    ("15", "Çuvaş Türkçesi"),
];

lazy_static! {
    // Any tag. Sanitized markup escapes `<` and `>` inside attribute values.
    static ref TAG: Regex = Regex::new(r"<[^>]*>").expect("invalid tag pattern");

    // (pattern, replacement) per code, in table order.
    static ref RULES: Vec<(Regex, String)> = ERA_CODES
        .iter()
        .map(|(code, label)| {
            let re = Regex::new(&format!(r"(?i)\b{}\b(\s+\w+)", code))
                .expect("invalid era code pattern");
            (re, format!("<b>{}</b> <i>${{1}}</i>", label))
        })
        .collect();
}

/// Replace every standalone era code that is followed by a word with its bold
/// label, and italicize that word. Rules run one after another in table order.
///
/// Only text between tags is rewritten; tags and their attribute values are
/// copied as is. The input is expected to be sanitized already. Running this
/// twice on the same text is not guaranteed to be stable.
pub fn highlight(text: &str) -> String {
    let mut out = text.to_string();
    for (re, rep) in RULES.iter() {
        if re.is_match(&out) {
            out = replace_text(&out, re, rep);
        }
    }
    out
}

/// Apply one rule to every text run of `html`, leaving tags untouched.
fn replace_text(html: &str, re: &Regex, rep: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    for tag in TAG.find_iter(html) {
        out.push_str(&re.replace_all(&html[last..tag.start()], rep));
        out.push_str(tag.as_str());
        last = tag.end();
    }
    out.push_str(&re.replace_all(&html[last..], rep));
    out
}
