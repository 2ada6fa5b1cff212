//! Route definitions
//!
//! All API routes organized by resource, mounted at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, posts, reactions, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(post_routes())
        .merge(reaction_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/create", post(users::create_user))
        .route("/users/leaderboard", post(users::leaderboard))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/delete/:user_id", post(users::delete_user))
        .route("/users/:user_id/posts", post(users::user_posts))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/create", post(posts::create_post))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/delete/:post_id", post(posts::delete_post))
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/reactions/react/:post_id", post(reactions::react))
        .route("/reactions/:reaction_id", get(reactions::get_reaction))
        .route(
            "/reactions/delete/:reaction_id",
            post(reactions::delete_reaction),
        )
}
