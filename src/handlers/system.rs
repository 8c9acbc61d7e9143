use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Blog API",
        "version": version,
        "description": "Blog post CRUD API backed by a JSON file",
        "endpoints": {
            "list": "GET /api/posts?sort=title|content&direction=asc|desc",
            "search": "GET /api/posts/search?title=..&content=..",
            "create": "POST /api/posts",
            "update": "PUT /api/posts/:id",
            "delete": "DELETE /api/posts/:id",
            "health": "GET /health",
        }
    }))
}

/// GET /health - reports whether the post file can be loaded
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.read().await {
        Ok(posts) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "storage": "ok",
                "posts": posts.len()
            })),
        ),
        Err(e) => {
            // Logs the details; the body only carries the client-safe message
            let err = ApiError::from(e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "storage": "error",
                    "storage_error": err.message()
                })),
            )
        }
    }
}
