//! Database models

mod post;
mod reaction;
mod user;

pub use post::PostModel;
pub use reaction::ReactionModel;
pub use user::UserModel;
