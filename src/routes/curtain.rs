//! Curtain CRUD routes.

use crate::handlers::curtain::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn curtain_routes(state: AppState) -> Router {
    Router::new()
        .route("/curtains", get(list).post(create))
        .route(
            "/curtains/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
