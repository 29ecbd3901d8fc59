use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/items handler - List every stored item
///
/// Returns the whole store in insertion order. There is no pagination or
/// filtering; an empty store yields `[]`.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items in insertion order", body = Vec<Item>)
    ),
    tag = "items"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.store.list().await;

    tracing::debug!("Listed {} items", items.len());

    (StatusCode::OK, Json(items))
}
