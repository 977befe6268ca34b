//! Handler for shortened URL deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::state::AppState;

/// Deletes a shortened URL by alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// # Responses
///
/// - **204 No Content** when the alias existed and was removed
/// - **404 Not Found** otherwise, including when the delete failed; a repeat
///   delete of the same alias therefore reports 404
pub async fn delete_url_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> StatusCode {
    if state.url_service.delete(&alias).await {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
