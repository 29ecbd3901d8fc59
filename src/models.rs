use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// A client-supplied record: any JSON object, stored and echoed verbatim.
///
/// No field is required and values are not type-checked. The only rule
/// enforced at the boundary is that the body decodes as an object, so arrays,
/// strings and numbers are rejected before a handler runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct Item(pub Map<String, JsonValue>);

/// Response type for the root endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of items currently held in memory
    pub items: usize,
}
