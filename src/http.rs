use std::sync::Arc;

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use rust_embed::Embed;

use crate::handlers::{search, site, Ctx};

// Embedded site templates and static files.
#[derive(Embed)]
#[folder = "static/"]
struct StaticFiles;

#[derive(Embed)]
#[folder = "templates/"]
pub struct Templates;

/// Initialize HTTP routes.
pub fn init_handlers(ctx: Arc<Ctx>) -> Router {
    let api_routes = Router::new()
        .route("/api/search", get(search::search))
        .route("/api/suggest", get(search::suggest))
        .route("/api/stats", get(search::get_stats))
        .route("/api/entries/{headword}", get(search::get_entry));

    let site_routes = Router::new()
        .route("/", get(site::index))
        .route("/static/{*path}", get(serve_static));

    Router::new()
        .merge(api_routes)
        .merge(site_routes)
        .with_state(ctx)
}

/// Serve embedded static files.
async fn serve_static(Path(path): Path<String>) -> impl IntoResponse {
    let path = path.trim_start_matches('/');
    match StaticFiles::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime)],
                content.data.to_vec(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
