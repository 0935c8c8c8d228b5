//! OpenAPI document for the curtain routes.

use crate::handlers::curtain;
use crate::model::Curtain;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    servers((url = "/api", description = "Curtain API root")),
    paths(curtain::list, curtain::read, curtain::create, curtain::update, curtain::delete),
    components(schemas(Curtain)),
    tags((name = "curtains", description = "Curtain inventory"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json. Mounted under `/api`, the prefix the document's server entry names.
pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
