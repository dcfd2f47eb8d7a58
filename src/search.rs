use crate::dataset::Dataset;
use crate::normalize::{has_prefix, normalize};

/// Return every headword that starts with `query` after Turkish normalization,
/// sorted by the original headword. An empty query matches nothing.
pub fn search(query: &str, dataset: &Dataset) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let q = normalize(query);
    let mut out: Vec<String> = dataset
        .headwords()
        .filter(|w| has_prefix(w, &q))
        .cloned()
        .collect();

    out.sort();
    out
}

/// Ghost text for `query`: the rest of the first matching headword (in dataset
/// order) past the characters already typed.
///
/// The dataset iterates in lexical order so this is always the tail of the first
/// `search()` result.
pub fn suggest(query: &str, dataset: &Dataset) -> Option<String> {
    if query.is_empty() {
        return None;
    }

    let q = normalize(query);
    let word = dataset.headwords().find(|w| has_prefix(w, &q))?;

    Some(word.chars().skip(query.chars().count()).collect())
}

/// Result of running a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Empty query: clear the results and ghost text.
    Cleared,

    /// Nothing starts with the query: show the error affordance.
    NoMatch,

    Matches {
        headwords: Vec<String>,
        suggestion: Option<String>,
    },
}

impl Outcome {
    pub fn compute(query: &str, dataset: &Dataset) -> Self {
        if query.is_empty() {
            return Self::Cleared;
        }

        let headwords = search(query, dataset);
        if headwords.is_empty() {
            return Self::NoMatch;
        }

        Self::Matches {
            headwords,
            suggestion: suggest(query, dataset),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// Same query as last time. Nothing to redraw.
    Unchanged,
    Changed(Outcome),
}

/// Per-input session over a loaded dataset. Remembers the last query so that
/// repeated input does not trigger a recompute.
pub struct Session<'a> {
    dataset: &'a Dataset,
    last: Option<String>,
}

impl<'a> Session<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            last: None,
        }
    }

    pub fn update(&mut self, query: &str) -> Update {
        if self.last.as_deref() == Some(query) {
            return Update::Unchanged;
        }
        self.last = Some(query.to_string());

        Update::Changed(Outcome::compute(query, self.dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DictionaryEntry;

    fn dataset(words: &[&str]) -> Dataset {
        words
            .iter()
            .map(|w| (*w, DictionaryEntry::default()))
            .collect()
    }

    #[test]
    fn prefix_sorted() {
        let d = dataset(&["kız", "kazak", "kaz"]);
        assert_eq!(search("kaz", &d), vec!["kaz", "kazak"]);
        assert_eq!(search("KAZ", &d), vec!["kaz", "kazak"]);
        assert_eq!(search("k", &d), vec!["kaz", "kazak", "kız"]);
    }

    #[test]
    fn prefix_not_substring() {
        let d = dataset(&["kazak", "ak"]);
        assert_eq!(search("zak", &d), Vec::<String>::new());
        assert_eq!(search("ak", &d), vec!["ak"]);
    }

    #[test]
    fn empty_query() {
        let d = dataset(&["kaz"]);
        assert!(search("", &d).is_empty());
        assert_eq!(suggest("", &d), None);
        assert_eq!(Outcome::compute("", &d), Outcome::Cleared);
    }

    #[test]
    fn dotted_and_dotless() {
        let d = dataset(&["ılık", "ilik", "Irmak", "İnce"]);
        assert_eq!(search("I", &d), vec!["Irmak", "ılık"]);
        assert_eq!(search("İ", &d), vec!["ilik", "İnce"]);
    }

    #[test]
    fn results_satisfy_prefix() {
        let d = dataset(&["Ağaç", "ağız", "ak", "Akın", "al", "İğne", "ırak"]);
        for q in ["a", "A", "ağ", "AK", "i", "ı", "İ", "x"] {
            let nq = normalize(q);
            let res = search(q, &d);
            for w in &res {
                assert!(normalize(w).starts_with(&nq), "{} / {}", q, w);
            }
            let mut sorted = res.clone();
            sorted.sort();
            assert_eq!(res, sorted);
        }
    }

    #[test]
    fn ghost_text() {
        let d = dataset(&["kız", "kazak", "kaz"]);
        assert_eq!(suggest("kaz", &d).as_deref(), Some(""));
        assert_eq!(suggest("kaza", &d).as_deref(), Some("k"));
        assert_eq!(suggest("KI", &d).as_deref(), Some("z"));
        assert_eq!(suggest("Ki", &d), None);
        assert_eq!(suggest("xyz", &d), None);
    }

    #[test]
    fn ghost_text_counts_chars() {
        let d = dataset(&["çağdaş"]);
        assert_eq!(suggest("ÇAĞ", &d).as_deref(), Some("daş"));
    }

    #[test]
    fn outcome() {
        let d = dataset(&["kız", "kazak", "kaz"]);
        assert_eq!(Outcome::compute("xyz", &d), Outcome::NoMatch);
        assert_eq!(
            Outcome::compute("kaz", &d),
            Outcome::Matches {
                headwords: vec!["kaz".into(), "kazak".into()],
                suggestion: Some(String::new()),
            }
        );
    }

    #[test]
    fn session_skips_repeats() {
        let d = dataset(&["kaz", "kazak"]);
        let mut s = Session::new(&d);

        assert!(matches!(s.update("ka"), Update::Changed(Outcome::Matches { .. })));
        assert_eq!(s.update("ka"), Update::Unchanged);
        assert_eq!(s.update("kx"), Update::Changed(Outcome::NoMatch));
        assert_eq!(s.update(""), Update::Changed(Outcome::Cleared));
        assert_eq!(s.update(""), Update::Unchanged);
        assert!(matches!(s.update("ka"), Update::Changed(_)));
    }
}
