//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Redirects an alias to its full URL.
///
/// # Endpoint
///
/// `GET /url/{alias}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the stored full URL
/// - **404 Not Found** when the alias does not exist (or the lookup failed)
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.url_service.get_by_alias(&alias).await {
        Some(item) => {
            (StatusCode::FOUND, [(header::LOCATION, item.full_url)]).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
