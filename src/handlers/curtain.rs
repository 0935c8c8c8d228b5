//! Curtain CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{Curtain, CurtainId};
use crate::response::{created_at, location_for, no_content, ok};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{OriginalUri, Path, State},
    http::{header, HeaderMap},
    response::IntoResponse,
};
use serde_json::error::Category;

fn parse_id(id_str: &str) -> Result<CurtainId, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json"
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

/// Curtain payload from a request body. An empty body and a JSON `null` are both
/// `None`; anything else must be JSON. Syntax errors are 400, shape errors 422.
fn curtain_payload(headers: &HeaderMap, body: &Bytes) -> Result<Option<Curtain>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    if !is_json_content_type(headers) {
        return Err(AppError::BadRequest(
            "expected request with `Content-Type: application/json`".into(),
        ));
    }
    serde_json::from_slice(body).map_err(|e| match e.classify() {
        Category::Data => AppError::Validation(e.to_string()),
        _ => AppError::BadRequest(format!("malformed JSON: {}", e)),
    })
}

#[utoipa::path(
    get,
    path = "/curtains",
    responses((status = 200, description = "All curtains", body = [Curtain]))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.curtains.list().await?;
    Ok(ok(rows))
}

#[utoipa::path(
    get,
    path = "/curtains/{id}",
    params(("id" = i32, Path, description = "Curtain id")),
    responses(
        (status = 200, description = "The curtain", body = Curtain),
        (status = 404, description = "No curtain with that id")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = state.curtains.get(id).await?;
    Ok(ok(row))
}

/// An empty body or a JSON `null` reaches the service as `None`.
#[utoipa::path(
    post,
    path = "/curtains",
    request_body = Curtain,
    responses(
        (status = 201, description = "Created", body = Curtain),
        (status = 400, description = "Payload missing or not JSON"),
        (status = 409, description = "Id already taken"),
        (status = 422, description = "Field too long or price outside NUMERIC(10, 2)")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = curtain_payload(&headers, &body)?;
    let row = state.curtains.create(payload).await?;
    let location = location_for(uri.path(), row.id);
    Ok(created_at(location, row))
}

#[utoipa::path(
    put,
    path = "/curtains/{id}",
    params(("id" = i32, Path, description = "Curtain id")),
    request_body = Curtain,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Path id and payload id differ, or payload missing"),
        (status = 404, description = "No curtain with that id"),
        (status = 422, description = "Field too long or price outside NUMERIC(10, 2)")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let curtain = curtain_payload(&headers, &body)?
        .ok_or_else(|| AppError::InvalidArgument("curtain payload is required".into()))?;
    state.curtains.update(id, curtain).await?;
    Ok(no_content())
}

#[utoipa::path(
    delete,
    path = "/curtains/{id}",
    params(("id" = i32, Path, description = "Curtain id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No curtain with that id")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.curtains.delete(id).await?;
    Ok(no_content())
}
