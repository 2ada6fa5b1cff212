//! # board-core
//!
//! Domain layer containing entities, payload validation, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;

// Re-export commonly used types at crate root
pub use entities::{Post, Reaction, User};
pub use error::DomainError;
pub use traits::{PostRepository, ReactionRepository, RepoResult, UserRepository};
pub use validation::{
    LeaderboardFormat, LeaderboardQuery, NewPost, NewReaction, NewUser, SortOrder,
    ValidationErrors,
};
