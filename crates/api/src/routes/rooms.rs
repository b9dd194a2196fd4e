use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/v1/rooms",
            get(handlers::rooms::list_rooms).fallback(handlers::docs::redirect_to_docs),
        )
        .route(
            "/api/v1/rooms/:room_id",
            get(handlers::rooms::meetings_for_room).fallback(handlers::docs::redirect_to_docs),
        )
}
