use std::collections::HashMap;

use axum::extract::{rejection::JsonRejection, Path, State};
use axum::Json;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::store::{Post, PostPatch};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Path ids that are not positive integers cannot name a post.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::post_not_found(raw))
}

/// PUT /api/posts/:id - merge title and/or content into an existing post
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PostPatch>, JsonRejection>,
) -> ApiResult<Post> {
    let id = parse_id(&id)?;
    let Json(patch) = payload?;

    let empty = patch.empty_fields();
    if !empty.is_empty() {
        let field_errors: HashMap<String, String> = empty
            .into_iter()
            .map(|field| (field.to_string(), "This field cannot be empty".to_string()))
            .collect();
        return Err(ApiError::validation_error(
            "Title and Content cannot be empty!",
            Some(field_errors),
        ));
    }
    if patch.is_empty() {
        debug!("update of post {} carries no known fields", id);
    }

    let post = state
        .store
        .mutate(|posts| {
            let post = posts
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| ApiError::post_not_found(id))?;
            patch.apply(post);
            Ok::<_, ApiError>(post.clone())
        })
        .await?;

    info!("updated post {}", post.id);
    Ok(ApiResponse::success(post))
}

/// DELETE /api/posts/:id - remove a post
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<DeleteResponse> {
    let id = parse_id(&id)?;

    state
        .store
        .mutate(|posts| {
            let index = posts
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| ApiError::post_not_found(id))?;
            posts.remove(index);
            Ok::<_, ApiError>(())
        })
        .await?;

    info!("deleted post {}", id);
    Ok(ApiResponse::success(DeleteResponse {
        message: format!("Post with id {} has been deleted successfully.", id),
    }))
}

/// Any non-GET method on /api/posts/search: `search` is not a post id.
pub async fn search_as_id() -> ApiError {
    ApiError::post_not_found("search")
}
