use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, Item, WelcomeResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FastAPI Backend",
        version = "1.0.0",
        description = "In-memory item list for the React frontend"
    ),
    paths(
        handlers::welcome::welcome_handler,
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::append::append_handler
    ),
    components(
        schemas(
            Item,
            WelcomeResponse,
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "root", description = "Service landing endpoint"),
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item list operations")
    )
)]
pub struct ApiDoc;
