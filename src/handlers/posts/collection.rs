use std::collections::HashMap;

use axum::extract::{
    rejection::{JsonRejection, QueryRejection},
    Query, State,
};
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::filter::{FilterOrder, FilterWhere, ListQuery, QueryPairs, SearchQuery};
use crate::middleware::{ApiResponse, ApiResult};
use crate::store::{NewPost, Post, PostStore};
use crate::AppState;

/// GET /api/posts - all posts, optionally sorted by title or content
///
/// Repeated query keys take their first value.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Vec<Post>> {
    let Query(pairs) = query?;
    let query = ListQuery::from_pairs(&pairs);

    // Validate before touching storage so a bad query returns no data
    let order = FilterOrder::from_query(&query)?;

    let mut posts = state.store.read().await?;
    if let Some(order) = order {
        order.apply(&mut posts);
    }

    Ok(ApiResponse::success(posts))
}

/// GET /api/posts/search - case-insensitive match on title OR content
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Vec<Post>> {
    let Query(pairs) = query?;
    let query = SearchQuery::from_pairs(&pairs);
    let posts = state.store.read().await?;

    let posts = match FilterWhere::from_query(&query) {
        Some(filter) => filter.apply(posts),
        None => posts,
    };

    Ok(ApiResponse::success(posts))
}

/// POST /api/posts - create a post with the next free id
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> ApiResult<Post> {
    let Json(new_post) = payload?;

    let missing = new_post.missing_fields();
    if !missing.is_empty() {
        let field_errors: HashMap<String, String> = missing
            .into_iter()
            .map(|field| (field.to_string(), "This field is required".to_string()))
            .collect();
        return Err(ApiError::validation_error(
            "Title and Content are required!",
            Some(field_errors),
        ));
    }

    let post = state
        .store
        .mutate(|posts| {
            let post = new_post.into_post(PostStore::next_id(posts)?);
            posts.push(post.clone());
            Ok::<_, ApiError>(post)
        })
        .await?;

    info!("created post {}", post.id);
    Ok(ApiResponse::created(post))
}
