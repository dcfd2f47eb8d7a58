/// Lowercase Turkish text for comparison.
///
/// The dotted capital `İ` becomes `i` and the plain capital `I` becomes the
/// dotless `ı` before generic lowercasing is applied to everything else, so
/// `IŞIK` and `ışık` compare equal while `İSTANBUL` matches `istanbul`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'İ' => out.push('i'),
            'I' => out.push('ı'),
            c => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Check whether `word` starts with an already normalized `prefix`.
pub fn has_prefix(word: &str, normalized_prefix: &str) -> bool {
    normalize(word).starts_with(normalized_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turkish_capitals() {
        assert_eq!(normalize("İ"), "i");
        assert_eq!(normalize("I"), "ı");
        assert_eq!(normalize("ABC"), "abc");
        assert_eq!(normalize("IŞIK"), "ışık");
        assert_eq!(normalize("İSTANBUL"), "istanbul");
        assert_eq!(normalize("ÇĞÖÜŞ"), "çğöüş");
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn idempotent() {
        for s in ["", "Kazak", "IĞDIR", "İzmir", "ışık", "Straße", "ΣΟΦΙΑ", "05 Türkçesi"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {:?}", s);
        }
    }

    #[test]
    fn prefix_check() {
        assert!(has_prefix("Irmak", &normalize("ır")));
        assert!(!has_prefix("Irmak", &normalize("ir")));
        assert!(has_prefix("İnci", "in"));
    }
}
