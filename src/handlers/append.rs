use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// POST /api/items handler - Append an item
///
/// Any JSON object is accepted as-is and echoed back. Bodies that are not an
/// object are rejected with [`ApiError::InvalidItem`] and leave the store
/// untouched.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = Item,
    responses(
        (status = 200, description = "Item stored, echoed back unchanged", body = Item),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 415, description = "Missing or unsupported content type", body = ErrorResponse),
        (status = 422, description = "Body is not a JSON object", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn append_handler(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(item) = payload?;

    let item = state.store.append(item).await;

    tracing::info!("Stored item with {} fields", item.0.len());
    Ok((StatusCode::OK, Json(item)))
}
