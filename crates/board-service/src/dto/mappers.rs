//! Mappers from domain entities to response DTOs
//!
//! Users and posts carry derived collections (post texts, reaction glyphs)
//! that live in other tables, so their mappers take those alongside the
//! entity instead of implementing `From`.

use board_core::entities::{Post, Reaction, User};

use super::responses::{PostResponse, ReactionResponse, UserResponse};

impl UserResponse {
    /// Build a user response from the entity and the texts of their posts
    pub fn from_entity(user: &User, posts: Vec<String>) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            total_reactions: user.total_reactions,
            posts,
        }
    }
}

impl PostResponse {
    /// Build a post response from the entity and the glyphs reacted to it
    pub fn from_entity(post: &Post, reactions: Vec<String>) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            text: post.text.clone(),
            reactions,
        }
    }
}

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id,
            post_id: reaction.post_id,
            author_id: reaction.author_id,
            reaction: reaction.glyph.clone(),
        }
    }
}
