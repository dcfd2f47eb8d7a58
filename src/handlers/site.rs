use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use super::Ctx;
use crate::dataset::DatasetState;

/// Build common template context.
fn base_context(ctx: &Ctx) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("asset_ver", &ctx.asset_ver);
    context.insert("consts", &ctx.consts);
    context
}

/// Render a site page.
fn render(
    ctx: &Ctx,
    template: &str,
    context: &tera::Context,
) -> std::result::Result<Html<String>, impl IntoResponse> {
    ctx.tpl.render(template, context).map(Html).map_err(|e| {
        // Log full error chain for debugging.
        let mut msg = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            msg.push_str(&format!(": {}", cause));
            source = std::error::Error::source(cause);
        }
        log::error!("template error: {}", msg);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("template error: {}", msg),
        )
    })
}

/// Site index: the search box, or the reload page if the dictionary failed to load.
/// Requesting the page after a failed load starts a new session, which loads the
/// dictionary again.
pub async fn index(State(ctx): State<Arc<Ctx>>) -> impl IntoResponse {
    let mut context = base_context(&ctx);

    let state = ctx.reload().await;
    match state.as_ref() {
        DatasetState::Ready(d) => {
            context.insert("word_count", &d.len());
            render(&ctx, "index.html", &context).into_response()
        }
        DatasetState::Failed(_) => match render(&ctx, "error.html", &context) {
            Ok(html) => (StatusCode::SERVICE_UNAVAILABLE, html).into_response(),
            Err(e) => e.into_response(),
        },
    }
}
