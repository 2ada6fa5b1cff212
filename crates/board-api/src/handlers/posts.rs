//! Post handlers
//!
//! Endpoints for post CRUD.

use axum::{
    extract::{Path, State},
    Json,
};
use board_service::{PostResponse, PostService};

use crate::extractors::JsonPayload;
use crate::response::{ApiResult, Deleted};
use crate::state::AppState;

/// Create a post
///
/// POST /posts/create
pub async fn create_post(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.create_post(&payload).await?;
    Ok(Json(response))
}

/// Get a post
///
/// GET /posts/:post_id
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.get_post(post_id).await?;
    Ok(Json(response))
}

/// Delete a post and every reaction on it
///
/// POST /posts/delete/:post_id
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> ApiResult<Deleted> {
    let service = PostService::new(state.service_context());
    service.delete_post(post_id).await?;
    Ok(Deleted)
}
