pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod store;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, SecurityConfig};
use crate::store::PostStore;

/// Shared handler state. Holds no posts, only the store handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostStore>,
}

impl AppState {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(PostStore::new(data_file)),
        }
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/api", post_routes())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if let Some(cors) = cors_layer(&config.security) {
        router = router.layer(cors);
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn post_routes() -> Router<AppState> {
    use axum::routing::put;
    use handlers::posts;

    Router::new()
        // Collection
        .route("/posts", get(posts::posts_list).post(posts::posts_create))
        // Other methods on `search` address it as a post id, like PUT/DELETE /posts/:id
        .route(
            "/posts/search",
            get(posts::posts_search).fallback(posts::post_search_as_id),
        )
        // Single post
        .route(
            "/posts/:id",
            put(posts::post_update).delete(posts::post_delete),
        )
}

fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }
    if security.cors_origins.is_empty() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
