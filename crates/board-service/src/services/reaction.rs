//! Reaction service
//!
//! Handles reacting to posts, reaction lookup, and removal.

use serde_json::Value;
use tracing::{info, instrument};

use board_core::validation::check_new_reaction;
use board_core::DomainError;

use crate::dto::{ReactionCreatedResponse, ReactionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// React to a post.
    ///
    /// The post id comes from the route, so its existence check always
    /// runs; the reacting-user check runs whenever `user_id` passed its
    /// type check. Both can surface together with field errors.
    #[instrument(skip(self, payload))]
    pub async fn react(
        &self,
        post_id: i64,
        payload: &Value,
    ) -> ServiceResult<ReactionCreatedResponse> {
        let mut check = check_new_reaction(payload);

        if !self.ctx.post_repo().exists(post_id).await? {
            check.reject_missing_post();
        }
        if let Some(user_id) = check.user_id {
            if !self.ctx.user_repo().exists(user_id).await? {
                check.reject_missing_user();
            }
        }

        let new_reaction = check.finish()?;
        let reaction = self.ctx.reaction_repo().create(post_id, &new_reaction).await?;

        info!(
            reaction_id = reaction.id,
            post_id,
            user_id = reaction.author_id,
            "Reaction created"
        );

        Ok(ReactionCreatedResponse {
            reaction_id: reaction.id,
            reaction: reaction.glyph,
        })
    }

    /// Get a reaction by id
    #[instrument(skip(self))]
    pub async fn get_reaction(&self, reaction_id: i64) -> ServiceResult<ReactionResponse> {
        let reaction = self
            .ctx
            .reaction_repo()
            .find_by_id(reaction_id)
            .await?
            .ok_or(DomainError::ReactionNotFound(reaction_id))?;

        Ok(ReactionResponse::from(&reaction))
    }

    /// Delete a reaction, restoring both counters
    #[instrument(skip(self))]
    pub async fn delete_reaction(&self, reaction_id: i64) -> ServiceResult<()> {
        self.ctx.reaction_repo().delete(reaction_id).await?;
        info!(reaction_id, "Reaction deleted");
        Ok(())
    }
}
