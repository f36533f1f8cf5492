use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillmatcher-api"
    }))
}

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Skillmatcher API is running",
        "routes": [
            "/health",
            "/api/v1/jobs",
            "/api/v1/resumes",
            "/api/v1/resumes/upload",
            "/api/v1/resumes/analyze",
            "/api/v1/users"
        ]
    }))
}
