use std::{
    collections::{btree_map, BTreeMap},
    path::Path,
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single dictionary entry. Extra fields in the source document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub description: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error fetching '{url}': {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error parsing dictionary: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable headword -> entry mapping. Iterates in ascending headword order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: BTreeMap<String, DictionaryEntry>,
}

impl Dataset {
    /// Load the dataset from a local path or an http(s) URL.
    pub async fn load(source: &str) -> Result<Self, LoadError> {
        let body = if is_url(source) {
            fetch(source).await?
        } else {
            tokio::fs::read_to_string(Path::new(source))
                .await
                .map_err(|e| LoadError::Io {
                    path: source.to_string(),
                    source: e,
                })?
        };

        Self::from_json(&body)
    }

    /// Parse a JSON object of `{headword: {description}}`.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        let entries: BTreeMap<String, DictionaryEntry> = serde_json::from_str(body)?;
        Ok(Self { entries })
    }

    pub fn get(&self, headword: &str) -> Option<&DictionaryEntry> {
        self.entries.get(headword)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headwords in iteration order.
    pub fn headwords(&self) -> btree_map::Keys<'_, String, DictionaryEntry> {
        self.entries.keys()
    }
}

impl<S: Into<String>> FromIterator<(S, DictionaryEntry)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (S, DictionaryEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Load outcome of one session. A failed load is not retried internally; only
/// a new session (another `init`) can replace it.
#[derive(Debug)]
pub enum DatasetState {
    Ready(Arc<Dataset>),
    Failed(String),
}

impl DatasetState {
    pub async fn init(source: &str) -> Self {
        log::info!("loading dictionary: {}", source);
        match Dataset::load(source).await {
            Ok(d) => {
                log::info!("loaded {} words", d.len());
                Self::Ready(Arc::new(d))
            }
            Err(e) => {
                log::error!("error loading dictionary: {}", e);
                Self::Failed(e.to_string())
            }
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            Self::Ready(d) => Some(d.as_ref()),
            Self::Failed(_) => None,
        }
    }

    /// Shared handle to the loaded dataset.
    pub fn shared(&self) -> Option<Arc<Dataset>> {
        match self {
            Self::Ready(d) => Some(d.clone()),
            Self::Failed(_) => None,
        }
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch(url: &str) -> Result<String, LoadError> {
    let wrap = |e: reqwest::Error| LoadError::Http {
        url: url.to_string(),
        source: e,
    };

    reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(wrap)?
        .text()
        .await
        .map_err(wrap)
}
