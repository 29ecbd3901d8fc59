use crate::models::WelcomeResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

pub const WELCOME_MESSAGE: &str = "Welcome to the FastAPI-React app!";

/// GET / handler - Fixed welcome message
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    ),
    tag = "root"
)]
pub async fn welcome_handler() -> (StatusCode, Json<WelcomeResponse>) {
    (
        StatusCode::OK,
        Json(WelcomeResponse {
            message: WELCOME_MESSAGE.to_string(),
        }),
    )
}
