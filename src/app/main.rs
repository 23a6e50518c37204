//! Application entry point.
//!
//! Ships the minimal surface the launcher needs to be servable and probeable:
//! a service-identity root and a health probe. The face-liveness business
//! routes live with the application team, not with the launcher.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Service name reported on the root route.
pub const SERVICE_NAME: &str = "face-liveness-api";

/// Build the application router.
pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn root() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "status": "running",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
