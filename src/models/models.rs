use serde::{Deserialize, Serialize};

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:9000";
pub const DEFAULT_DATASET: &str = "semantic.json";

/// Search query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// A matched dictionary entry ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntry {
    pub headword: String,

    /// Sanitized and highlighted description HTML.
    pub description: String,
}

/// Search results wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,

    /// Number of matching headwords before `max_results` is applied.
    pub total: usize,

    /// Ghost text to show after the typed query.
    pub suggestion: Option<String>,
    pub results: Vec<ResultEntry>,
}

/// Dictionary statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    pub words: usize,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub root_url: String,

    /// Path or http(s) URL of the dictionary JSON document.
    #[serde(default)]
    pub dataset: String,

    /// Maximum number of entries returned per search. 0 = unlimited.
    #[serde(default)]
    pub max_results: usize,
}
