//! Response DTOs for serializing API outputs

use serde::Serialize;

/// User representation returned by the API.
///
/// `posts` carries the texts of the user's posts, not full post objects.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub total_reactions: i64,
    pub posts: Vec<String>,
}

/// Post representation returned by the API.
///
/// `reactions` carries the emoji glyphs left on the post. The post's
/// reaction counter is not serialized.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostResponse {
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    pub reactions: Vec<String>,
}

/// Reaction representation returned by the API
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReactionResponse {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub reaction: String,
}

/// Body returned when a reaction is created
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReactionCreatedResponse {
    pub reaction_id: i64,
    pub reaction: String,
}

/// Liveness probe body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

/// Readiness probe body with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

/// Per-dependency health flags
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not_ready" },
            checks: HealthChecks { database },
        }
    }
}
