use std::io::{self, BufRead, Write};

use crate::dataset::Dataset;
use crate::markup::{plain_text, render_description};
use crate::search::{Outcome, Session, Update};

const QUIT: &str = ":q";

/// Read queries line by line from `input` and print the results of each to `out`.
/// A line that repeats the previous query is not searched again.
pub fn run<R: BufRead, W: Write>(dataset: &Dataset, input: R, out: &mut W) -> io::Result<()> {
    let mut session = Session::new(dataset);

    writeln!(out, "{} words. Type to search, {} to quit.", dataset.len(), QUIT)?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let query = line.trim();
        if query == QUIT {
            break;
        }

        match session.update(query) {
            Update::Unchanged => writeln!(out, "  (unchanged)")?,
            Update::Changed(outcome) => print_outcome(dataset, query, &outcome, out)?,
        }
        prompt(out)?;
    }

    Ok(())
}

/// Print a search outcome: the query with its ghost text in brackets, then each entry.
pub fn print_outcome<W: Write>(
    dataset: &Dataset,
    query: &str,
    outcome: &Outcome,
    out: &mut W,
) -> io::Result<()> {
    match outcome {
        Outcome::Cleared => Ok(()),
        Outcome::NoMatch => writeln!(out, "  no match for '{}'", query),
        Outcome::Matches {
            headwords,
            suggestion,
        } => {
            writeln!(
                out,
                "  {}[{}]  ({} found)",
                query,
                suggestion.as_deref().unwrap_or_default(),
                headwords.len()
            )?;

            for w in headwords {
                let desc = dataset
                    .get(w)
                    .map(|e| plain_text(&render_description(&e.description)))
                    .unwrap_or_default();
                writeln!(out, "  - {}: {}", w, desc)?;
            }
            Ok(())
        }
    }
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
