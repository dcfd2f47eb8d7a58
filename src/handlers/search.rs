use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};

use super::{clean_query, json, ApiErr, ApiResp, Ctx, Result};
use crate::dataset::{Dataset, DictionaryEntry};
use crate::markup::render_description;
use crate::models::{ResultEntry, SearchQuery, SearchResults, Stats};
use crate::search::{self, Outcome};

/// Prefix search with ghost text (public API).
pub async fn search(
    State(ctx): State<Arc<Ctx>>,
    Query(query): Query<SearchQuery>,
) -> Result<ApiResp<SearchResults>> {
    let dataset = ctx.dataset().await?;
    Ok(json(do_search(
        &dataset,
        clean_query(&query.q),
        ctx.consts.max_results,
    )))
}

/// Run a search and render the descriptions of the matches.
/// max_results: 0 = unlimited, >0 = truncate the rendered entries.
pub fn do_search(dataset: &Dataset, query: &str, max_results: usize) -> SearchResults {
    let mut out = SearchResults {
        query: query.to_string(),
        ..Default::default()
    };

    let Outcome::Matches {
        headwords,
        suggestion,
    } = Outcome::compute(query, dataset)
    else {
        return out;
    };

    out.total = headwords.len();
    out.suggestion = suggestion;

    let limit = if max_results > 0 {
        max_results
    } else {
        headwords.len()
    };
    out.results = headwords
        .into_iter()
        .take(limit)
        .filter_map(|w| {
            let entry = dataset.get(&w)?;
            Some(ResultEntry {
                description: render_description(&entry.description),
                headword: w,
            })
        })
        .collect();

    out
}

/// Ghost text only.
pub async fn suggest(
    State(ctx): State<Arc<Ctx>>,
    Query(query): Query<SearchQuery>,
) -> Result<ApiResp<Option<String>>> {
    let dataset = ctx.dataset().await?;
    Ok(json(search::suggest(clean_query(&query.q), &dataset)))
}

/// Get a single entry by its exact headword.
pub async fn get_entry(
    State(ctx): State<Arc<Ctx>>,
    Path(headword): Path<String>,
) -> Result<ApiResp<DictionaryEntry>> {
    let dataset = ctx.dataset().await?;
    match dataset.get(&headword) {
        Some(e) => Ok(json(e.clone())),
        None => Err(ApiErr::new("entry not found", StatusCode::NOT_FOUND)),
    }
}

/// Dictionary stats.
pub async fn get_stats(State(ctx): State<Arc<Ctx>>) -> Result<ApiResp<Stats>> {
    let dataset = ctx.dataset().await?;
    Ok(json(Stats {
        words: dataset.len(),
    }))
}
