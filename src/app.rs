use anyhow::{Context, Result};
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowCredentials, AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Assemble the full application: routes, API docs, CORS and request tracing.
pub fn build_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config.cors_allowed_origin)?;
    let openapi = ApiDoc::openapi();

    Ok(Router::new()
        .route(routes::ROOT, get(handlers::welcome_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::ITEMS,
            get(handlers::list_handler).post(handlers::append_handler),
        )
        .merge(SwaggerUi::new(routes::DOCS).url(routes::OPENAPI, openapi))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// CORS policy for a single trusted frontend origin.
///
/// Credentials are allowed, which rules out wildcards, so requested methods
/// and headers are mirrored back instead. Requests from any other origin get
/// neither `access-control-allow-origin` nor `access-control-allow-credentials`.
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("CORS_ALLOWED_ORIGIN is not a valid origin: '{}'", origin))?;
    let trusted = origin.clone();

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(AllowCredentials::predicate(move |request_origin, _| {
            *request_origin == trusted
        }))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
