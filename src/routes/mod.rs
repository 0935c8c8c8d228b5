//! Router assembly.

mod common;
mod curtain;
mod openapi;

pub use common::common_routes_with_ready;
pub use curtain::curtain_routes;
pub use openapi::{openapi_routes, ApiDoc};

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: common routes at the root, curtains and the OpenAPI
/// document under `/api`.
pub fn app(state: AppState, body_limit: usize) -> Router {
    let api = Router::new()
        .merge(curtain_routes(state.clone()))
        .merge(openapi_routes());

    Router::new()
        .merge(common_routes_with_ready(state))
        .nest("/api", api)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
