//! Repository traits (ports)

mod repositories;

pub use repositories::{PostRepository, ReactionRepository, RepoResult, UserRepository};
