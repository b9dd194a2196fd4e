use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        handlers::docs::DOCS_PATH,
        get(handlers::docs::api_docs).fallback(handlers::docs::redirect_to_docs),
    )
}
