//! Post service
//!
//! Handles post creation, lookup, and cascade deletion.

use serde_json::Value;
use tracing::{info, instrument};

use board_core::validation::check_new_post;
use board_core::DomainError;

use crate::dto::PostResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post from a request payload.
    ///
    /// The author existence lookup runs whenever `author_id` passed its
    /// type check, so `invalid_author_id` is reported alongside any other
    /// field errors.
    #[instrument(skip(self, payload))]
    pub async fn create_post(&self, payload: &Value) -> ServiceResult<PostResponse> {
        let mut check = check_new_post(payload);

        if let Some(author_id) = check.author_id {
            if !self.ctx.user_repo().exists(author_id).await? {
                check.reject_missing_author();
            }
        }

        let new_post = check.finish()?;
        let post = self.ctx.post_repo().create(&new_post).await?;

        info!(post_id = post.id, author_id = post.author_id, "Post created");

        Ok(PostResponse::from_entity(&post, Vec::new()))
    }

    /// Get a post by id, with the glyphs reacted to it
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: i64) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let reactions = self.ctx.reaction_repo().glyphs_by_post(post_id).await?;
        Ok(PostResponse::from_entity(&post, reactions))
    }

    /// Delete a post and every reaction on it
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: i64) -> ServiceResult<()> {
        self.ctx.post_repo().delete_cascading(post_id).await?;
        info!(post_id, "Post deleted");
        Ok(())
    }
}
