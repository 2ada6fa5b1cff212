//! Post entity - a text post owned by exactly one user

/// Post entity with its denormalized reaction counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    /// Count of reactions attached to this post, kept in sync by the store
    pub total_reactions: i64,
}

impl Post {
    /// Create a new Post with a zeroed reaction counter
    pub fn new(id: i64, author_id: i64, text: String) -> Self {
        Self {
            id,
            author_id,
            text,
            total_reactions: 0,
        }
    }
}
