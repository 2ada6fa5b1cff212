//! Service layer - business logic and use cases
//!
//! Each service borrows the shared [`ServiceContext`] and composes the
//! pure payload checks from `board-core` with the referential lookups
//! that need a repository.

pub mod context;
pub mod error;
pub mod leaderboard;
pub mod post;
pub mod reaction;
pub mod user;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use leaderboard::{Leaderboard, LeaderboardService};
pub use post::PostService;
pub use reaction::ReactionService;
pub use user::UserService;
