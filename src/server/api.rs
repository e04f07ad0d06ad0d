//! Visitor identity and scroll position endpoints

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use super::cookie::{self, COOKIE_NAME};
use super::error::ApiError;
use super::AppState;

/// `GET /api/id`: hand out a visitor identifier unless one is already set
pub async fn identify(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if cookie::find(&headers, COOKIE_NAME).is_some() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let visitor = Uuid::new_v4().to_string();
    tracing::debug!("Issuing visitor identifier {}", visitor);

    let set_cookie = state.cookie_attributes().render(COOKIE_NAME, &visitor);
    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, set_cookie)]).into_response()
}

/// `GET /api/scroll`: the visitor's saved record, `null` when none exists
pub async fn read_scroll(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let visitor = require_visitor(&headers)?;
    let stored = state.store.get(&visitor).await?;
    Ok(Json(decode_record(stored.as_deref())?))
}

/// `PUT /api/scroll`: replace the visitor's record with the raw body
pub async fn write_scroll(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Result<StatusCode, ApiError> {
    let visitor = require_visitor(&headers)?;
    let encoded = Value::String(body).to_string();
    state.store.set(&visitor, encoded).await?;
    tracing::debug!("Stored scroll record for {}", visitor);
    Ok(StatusCode::NO_CONTENT)
}

/// Identifier from the `uuid` cookie; absent and empty are both rejected
fn require_visitor(headers: &HeaderMap) -> Result<String, ApiError> {
    match cookie::find(headers, COOKIE_NAME) {
        Some(visitor) if !visitor.is_empty() => Ok(visitor),
        _ => Err(ApiError::MissingVisitor),
    }
}

/// Records are stored as a JSON string wrapping the request body.
///
/// An absent or blank record decodes to `null`. A stored value that is not
/// a JSON string is returned as-is.
pub fn decode_record(stored: Option<&str>) -> Result<Value, serde_json::Error> {
    let Some(stored) = stored.filter(|s| !s.trim().is_empty()) else {
        return Ok(Value::Null);
    };

    match serde_json::from_str::<Value>(stored)? {
        Value::String(body) if body.trim().is_empty() => Ok(Value::Null),
        Value::String(body) => serde_json::from_str(&body),
        other => Ok(other),
    }
}
