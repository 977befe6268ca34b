//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::url::{ShortenRequest, ShortenResponse};
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "fullUrl": "https://example.com",
///   "customAlias": "my-alias"   // optional
/// }
/// ```
///
/// # Responses
///
/// - **201 Created** with `{"shortUrl": "..."}` on success
/// - **400 Bad Request** with `{}` when `fullUrl` is blank, the custom alias
///   contains characters other than letters/digits/hyphens, the alias is
///   already taken, or the record could not be created
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Response {
    if payload.validate().is_err() || payload.full_url.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({}))).into_response();
    }

    match state
        .url_service
        .shorten(&payload.full_url, payload.custom_alias.as_deref())
        .await
    {
        Some(item) => (
            StatusCode::CREATED,
            Json(ShortenResponse {
                short_url: item.short_url,
            }),
        )
            .into_response(),
        None => (StatusCode::BAD_REQUEST, Json(json!({}))).into_response(),
    }
}
