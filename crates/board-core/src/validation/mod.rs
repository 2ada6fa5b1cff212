//! Payload validation
//!
//! Pure checks over raw JSON payloads. Each `check_*` function inspects an
//! untyped `serde_json::Value` and produces either a validated request struct
//! or a [`ValidationErrors`] map of wire error codes to messages. Referential
//! checks (existence, uniqueness) are store lookups; the service layer runs
//! them and merges their errors into the same map before finishing a check.

mod emoji;
mod errors;
mod post;
mod query;
mod reaction;
mod user;

pub use emoji::normalize_reaction;
pub use errors::ValidationErrors;
pub use post::{check_new_post, NewPost, PostCheck};
pub use query::{check_leaderboard, check_sort_type, LeaderboardFormat, LeaderboardQuery, SortOrder};
pub use reaction::{check_new_reaction, NewReaction, ReactionCheck};
pub use user::{check_new_user, NewUser, UserCheck, MAX_FIELD_CHARS};

/// Code and message reported when a required payload key is missing
pub(crate) const INVALID_JSON_FORMAT: &str = "invalid_json_format";
pub(crate) const INVALID_JSON_FORMAT_MESSAGE: &str = "json format is invalid";
