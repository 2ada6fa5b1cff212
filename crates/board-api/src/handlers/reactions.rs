//! Reaction handlers
//!
//! Endpoints for reacting to posts and reaction lookup/removal.

use axum::{
    extract::{Path, State},
    Json,
};
use board_service::{ReactionCreatedResponse, ReactionResponse, ReactionService};

use crate::extractors::JsonPayload;
use crate::response::{ApiResult, Deleted};
use crate::state::AppState;

/// React to a post
///
/// POST /reactions/react/:post_id
pub async fn react(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<Json<ReactionCreatedResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.react(post_id, &payload).await?;
    Ok(Json(response))
}

/// Get a reaction
///
/// GET /reactions/:reaction_id
pub async fn get_reaction(
    State(state): State<AppState>,
    Path(reaction_id): Path<i64>,
) -> ApiResult<Json<ReactionResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.get_reaction(reaction_id).await?;
    Ok(Json(response))
}

/// Delete a reaction, restoring both counters
///
/// POST /reactions/delete/:reaction_id
pub async fn delete_reaction(
    State(state): State<AppState>,
    Path(reaction_id): Path<i64>,
) -> ApiResult<Deleted> {
    let service = ReactionService::new(state.service_context());
    service.delete_reaction(reaction_id).await?;
    Ok(Deleted)
}
