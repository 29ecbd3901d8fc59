// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/api/items";
pub const DOCS: &str = "/docs";
pub const OPENAPI: &str = "/openapi.json";
