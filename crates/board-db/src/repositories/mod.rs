//! Repository implementations

mod error;
mod post;
mod reaction;
mod user;

pub use post::SqlitePostRepository;
pub use reaction::SqliteReactionRepository;
pub use user::SqliteUserRepository;

pub(crate) use error::{map_db_error, map_unique_violation};
pub(crate) use post::cascade_delete_post;
