//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Post not found: {0}")]
    PostNotFound(i64),

    #[error("Reaction not found: {0}")]
    ReactionNotFound(i64),

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Wire error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "invalid_user_id",
            Self::PostNotFound(_) => "invalid_post_id",
            Self::ReactionNotFound(_) => "invalid_reaction_id",
            Self::EmailAlreadyExists => "invalid_email",
            Self::DatabaseError(_) => "database_error",
        }
    }

    /// Wire error message for API responses
    pub fn message(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "The user with such id doesn't exist",
            Self::PostNotFound(_) => "The post with such id doesn't exist",
            Self::ReactionNotFound(_) => "The reaction with such id doesn't exist",
            Self::EmailAlreadyExists => "user with such email already exists",
            Self::DatabaseError(_) => "database error",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::PostNotFound(_) | Self::ReactionNotFound(_)
        )
    }
}
