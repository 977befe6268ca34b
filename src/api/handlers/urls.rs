//! Handler for the shortened URL listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::url::UrlItemResponse;
use crate::state::AppState;

/// Lists all shortened URLs.
///
/// # Endpoint
///
/// `GET /url`
///
/// # Responses
///
/// Always **200 OK** with a JSON array. Service-level failures are reported
/// as an empty array, same as an empty store.
pub async fn url_list_handler(State(state): State<AppState>) -> Json<Vec<UrlItemResponse>> {
    let items = state.url_service.get_all().await.unwrap_or_default();

    Json(items.into_iter().map(Into::into).collect())
}
