//! User handlers
//!
//! Endpoints for user CRUD, a user's posts, and the reaction leaderboard.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use board_service::{Leaderboard, LeaderboardService, PostResponse, UserResponse, UserService};
use serde::Serialize;

use crate::extractors::{parse_payload, JsonPayload};
use crate::response::{ApiResult, Deleted, Png};
use crate::state::AppState;

/// Create a user
///
/// POST /users/create
pub async fn create_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(&payload).await?;
    Ok(Json(response))
}

/// Get a user
///
/// GET /users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// Delete a user, their posts, and every reaction on those posts
///
/// POST /users/delete/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Deleted> {
    let service = UserService::new(state.service_context());
    service.delete_user(user_id).await?;
    Ok(Deleted)
}

/// A user's posts, wrapped per the wire contract
#[derive(Debug, Serialize)]
pub struct UserPostsResponse {
    pub posts: Vec<PostResponse>,
}

/// List a user's posts ordered by reaction count
///
/// POST /users/:user_id/posts
///
/// The path id is checked before the body: an unknown user wins over a
/// bad content type or malformed payload, so the body is taken raw here
/// instead of through the extractor.
pub async fn user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<UserPostsResponse>> {
    let service = UserService::new(state.service_context());
    service.ensure_user_exists(user_id).await?;

    let payload = parse_payload(&headers, &body)?;
    let posts = service.posts_by_user(user_id, &payload).await?;
    Ok(Json(UserPostsResponse { posts }))
}

/// Users sorted by reaction count, wrapped per the wire contract
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub users: Vec<UserResponse>,
}

/// The users leaderboard, as a sorted list or a PNG bar chart
///
/// POST /users/leaderboard
pub async fn leaderboard(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<Response> {
    let service = LeaderboardService::new(state.service_context());
    match service.leaderboard(&payload).await? {
        Leaderboard::List(users) => Ok(Json(LeaderboardResponse { users }).into_response()),
        Leaderboard::Graph(png) => Ok(Png(png).into_response()),
    }
}
