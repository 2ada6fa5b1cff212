//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, the infrastructure layer provides
//! the implementation. Every mutation that touches more than one row (counter
//! propagation, cascade deletes) must be applied as a single atomic unit:
//! either all its writes persist or none do.

use async_trait::async_trait;

use crate::entities::{Post, Reaction, User};
use crate::error::DomainError;
use crate::validation::{NewPost, NewReaction, NewUser, SortOrder};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Data access for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    async fn exists(&self, id: i64) -> RepoResult<bool>;

    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a validated user and return the stored row
    async fn create(&self, new: &NewUser) -> RepoResult<User>;

    /// Delete a user, cascading through their posts and all reactions on
    /// those posts, decrementing every affected reaction-author's counter.
    /// Returns `UserNotFound` when the id doesn't exist.
    async fn delete_cascading(&self, id: i64) -> RepoResult<()>;

    /// All users ordered by `total_reactions`
    async fn list_by_total_reactions(&self, order: SortOrder) -> RepoResult<Vec<User>>;
}

/// Data access for posts
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>>;

    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// Insert a validated post and return the stored row
    async fn create(&self, new: &NewPost) -> RepoResult<Post>;

    /// Delete a post, cascading through its reactions and decrementing the
    /// affected reaction-authors' counters. Returns `PostNotFound` when the
    /// id doesn't exist.
    async fn delete_cascading(&self, id: i64) -> RepoResult<()>;

    /// A user's posts ordered by `total_reactions`
    async fn list_by_author(&self, author_id: i64, order: SortOrder) -> RepoResult<Vec<Post>>;

    /// Text of every post authored by a user, in storage order
    async fn texts_by_author(&self, author_id: i64) -> RepoResult<Vec<String>>;
}

/// Data access for reactions
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reaction>>;

    /// Insert a validated reaction against a post, incrementing the post's
    /// and the reacting user's counters in the same unit of work.
    async fn create(&self, post_id: i64, new: &NewReaction) -> RepoResult<Reaction>;

    /// Delete a reaction, decrementing exactly one user counter and one post
    /// counter. Returns `ReactionNotFound` when the id doesn't exist.
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Glyphs of every reaction on a post, in storage order
    async fn glyphs_by_post(&self, post_id: i64) -> RepoResult<Vec<String>>;
}
