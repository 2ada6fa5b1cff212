//! Reaction creation payload validation

use serde_json::Value;

use super::emoji::normalize_reaction;
use super::errors::ValidationErrors;
use super::{INVALID_JSON_FORMAT, INVALID_JSON_FORMAT_MESSAGE};

/// Validated reaction-creation request; the glyph is already normalized
/// (short-codes expanded to the emoji they name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub user_id: i64,
    pub glyph: String,
}

/// Outcome of the pure field checks for reaction creation.
///
/// `user_id` is populated whenever its type check passed so the service
/// layer can run the reacting-user existence lookup. The post existence
/// check (the post id comes from the route, not the payload) always runs.
#[derive(Debug)]
pub struct ReactionCheck {
    pub errors: ValidationErrors,
    pub user_id: Option<i64>,
    fields: Option<NewReaction>,
}

impl ReactionCheck {
    /// Record that the target post does not exist
    pub fn reject_missing_post(&mut self) {
        self.errors
            .insert("invalid_post_id", "post with such id doesn't exist");
    }

    /// Record that the reacting user does not exist
    pub fn reject_missing_user(&mut self) {
        self.errors
            .insert("invalid_user_id", "user with such id doesn't exist");
    }

    pub fn finish(self) -> Result<NewReaction, ValidationErrors> {
        match self.fields {
            Some(fields) if self.errors.is_empty() => Ok(fields),
            _ => Err(self.errors),
        }
    }
}

/// Run the pure field checks for a reaction-creation payload.
///
/// The emoji check is skipped when the reaction type check already failed.
pub fn check_new_reaction(payload: &Value) -> ReactionCheck {
    let mut errors = ValidationErrors::new();

    let (Some(user_id), Some(reaction)) = (payload.get("user_id"), payload.get("reaction")) else {
        errors.insert(INVALID_JSON_FORMAT, INVALID_JSON_FORMAT_MESSAGE);
        return ReactionCheck {
            errors,
            user_id: None,
            fields: None,
        };
    };

    if !user_id.is_i64() {
        errors.insert("invalid_user_id_type", "user_id should be an integer");
    }
    if !reaction.is_string() {
        errors.insert("invalid_reaction_type", "reaction should be a string");
    }

    let glyph = match reaction.as_str() {
        Some(raw) => {
            let normalized = normalize_reaction(raw);
            if normalized.is_none() {
                errors.insert(
                    "invalid_reaction",
                    "reaction should be a single emoji, or a string in the following format - :unicode_emoji_CLDR_short_name:",
                );
            }
            normalized
        }
        None => None,
    };

    let user_id = user_id.as_i64();
    let fields = match (user_id, glyph) {
        (Some(user_id), Some(glyph)) if errors.is_empty() => Some(NewReaction { user_id, glyph }),
        _ => None,
    };

    ReactionCheck {
        errors,
        user_id,
        fields,
    }
}
