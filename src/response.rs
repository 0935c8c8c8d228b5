//! Success response helpers.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// 201 with the created body and a `Location` header pointing at its GET route.
pub fn created_at<T: Serialize>(location: String, data: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(data),
    )
        .into_response()
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// `<collection path>/<id>` for a request made against the collection.
pub fn location_for(collection_path: &str, id: impl std::fmt::Display) -> String {
    format!("{}/{}", collection_path.trim_end_matches('/'), id)
}
