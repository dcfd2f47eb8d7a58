pub mod search;
pub mod site;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tera::Tera;
use tokio::sync::RwLock;

use crate::dataset::{Dataset, DatasetState};

/// Application context passed to all handlers.
pub struct Ctx {
    /// Dictionary of the current session. Replaced only when a user reloads
    /// the site after a failed load.
    state: RwLock<Arc<DatasetState>>,

    /// Path or URL the dictionary is loaded from.
    source: String,

    /// Site templates (embedded in binary).
    pub tpl: Tera,

    pub consts: Consts,
    pub asset_ver: String,
}

impl Ctx {
    pub fn new(
        state: DatasetState,
        source: impl Into<String>,
        tpl: Tera,
        consts: Consts,
        asset_ver: impl Into<String>,
    ) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
            source: source.into(),
            tpl,
            consts,
            asset_ver: asset_ver.into(),
        }
    }

    pub async fn state(&self) -> Arc<DatasetState> {
        self.state.read().await.clone()
    }

    /// The loaded dataset or a 503 if the current session failed to load it.
    pub async fn dataset(&self) -> Result<Arc<Dataset>> {
        self.state().await.shared().ok_or_else(|| {
            ApiErr::new(
                "dictionary could not be loaded",
                StatusCode::SERVICE_UNAVAILABLE,
            )
        })
    }

    /// Start a new session after a failed load by loading the dictionary again.
    /// A session that is already ready is kept as is.
    pub async fn reload(&self) -> Arc<DatasetState> {
        let mut state = self.state.write().await;
        if matches!(**state, DatasetState::Failed(_)) {
            *state = Arc::new(DatasetState::init(&self.source).await);
        }
        state.clone()
    }
}

/// Application constants.
#[derive(Clone, Default, serde::Serialize)]
pub struct Consts {
    pub root_url: String,

    /// Max entries per search. 0 = unlimited.
    pub max_results: usize,
}

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResp<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T: Serialize> IntoResponse for ApiResp<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub fn json<T: Serialize>(data: T) -> ApiResp<T> {
    ApiResp {
        data: Some(data),
        message: None,
    }
}

/// API error type.
#[derive(Debug)]
pub struct ApiErr {
    pub message: String,
    pub status: StatusCode,
}

impl ApiErr {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let json = Json(ApiResp::<()> {
            data: None,
            message: Some(self.message),
        });
        (self.status, json).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiErr>;

/// Clean a raw query from the search box. Only surrounding whitespace is
/// removed; inner text is matched as typed.
pub fn clean_query(q: &str) -> &str {
    q.trim()
}
