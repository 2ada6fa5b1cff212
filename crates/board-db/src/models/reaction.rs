//! Reaction database model

use sqlx::FromRow;

/// Database model for the reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub reaction: String,
}
