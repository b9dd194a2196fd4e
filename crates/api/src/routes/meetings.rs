use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/v1/meetings",
            get(handlers::meetings::list_meetings)
                .post(handlers::meetings::create_meeting)
                .fallback(handlers::docs::redirect_to_docs),
        )
        .route(
            "/api/v1/meetings/:mtg_id",
            delete(handlers::meetings::delete_meeting).fallback(handlers::docs::redirect_to_docs),
        )
}
