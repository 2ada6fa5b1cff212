//! User service
//!
//! Handles user creation, lookup, cascade deletion, and listing a user's
//! posts ordered by reaction count.

use serde_json::Value;
use tracing::{info, instrument};

use board_core::validation::{check_new_user, check_sort_type};
use board_core::DomainError;

use crate::dto::{PostResponse, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a user from a request payload.
    ///
    /// The uniqueness lookup runs whenever the email passed its type check,
    /// so `invalid_email` is reported alongside any other field errors.
    #[instrument(skip(self, payload))]
    pub async fn create_user(&self, payload: &Value) -> ServiceResult<UserResponse> {
        let mut check = check_new_user(payload);

        if let Some(email) = check.email.clone() {
            if self.ctx.user_repo().email_exists(&email).await? {
                check.reject_email_taken();
            }
        }

        let new_user = check.finish()?;
        let user = self.ctx.user_repo().create(&new_user).await?;

        info!(user_id = user.id, "User created");

        Ok(UserResponse::from_entity(&user, Vec::new()))
    }

    /// Get a user by id, with the texts of their posts
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let posts = self.ctx.post_repo().texts_by_author(user_id).await?;
        Ok(UserResponse::from_entity(&user, posts))
    }

    /// Delete a user, their posts, and every reaction on those posts
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: i64) -> ServiceResult<()> {
        self.ctx.user_repo().delete_cascading(user_id).await?;
        info!(user_id, "User deleted");
        Ok(())
    }

    /// Fail with `UserNotFound` unless the user exists.
    ///
    /// The user's-posts route checks the path id before it touches the
    /// request body, so this runs separately from `posts_by_user`.
    #[instrument(skip(self))]
    pub async fn ensure_user_exists(&self, user_id: i64) -> ServiceResult<()> {
        if self.ctx.user_repo().exists(user_id).await? {
            Ok(())
        } else {
            Err(DomainError::UserNotFound(user_id).into())
        }
    }

    /// List a user's posts ordered by reaction count per the payload's
    /// `sort_type`
    #[instrument(skip(self, payload))]
    pub async fn posts_by_user(
        &self,
        user_id: i64,
        payload: &Value,
    ) -> ServiceResult<Vec<PostResponse>> {
        let sort = check_sort_type(payload)?;

        let posts = self.ctx.post_repo().list_by_author(user_id, sort).await?;
        let mut responses = Vec::with_capacity(posts.len());
        for post in &posts {
            let reactions = self.ctx.reaction_repo().glyphs_by_post(post.id).await?;
            responses.push(PostResponse::from_entity(post, reactions));
        }
        Ok(responses)
    }
}
