//! Post creation payload validation

use serde_json::Value;

use super::errors::ValidationErrors;
use super::{INVALID_JSON_FORMAT, INVALID_JSON_FORMAT_MESSAGE};

/// Validated post-creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author_id: i64,
    pub text: String,
}

/// Outcome of the pure field checks for post creation.
///
/// `author_id` is populated whenever its type check passed so the service
/// layer can run the author existence lookup.
#[derive(Debug)]
pub struct PostCheck {
    pub errors: ValidationErrors,
    pub author_id: Option<i64>,
    fields: Option<NewPost>,
}

impl PostCheck {
    /// Record that the referenced author does not exist
    pub fn reject_missing_author(&mut self) {
        self.errors
            .insert("invalid_author_id", "user with such id doesn't exist");
    }

    pub fn finish(self) -> Result<NewPost, ValidationErrors> {
        match self.fields {
            Some(fields) if self.errors.is_empty() => Ok(fields),
            _ => Err(self.errors),
        }
    }
}

/// Run the pure field checks for a post-creation payload
pub fn check_new_post(payload: &Value) -> PostCheck {
    let mut errors = ValidationErrors::new();

    let (Some(author_id), Some(text)) = (payload.get("author_id"), payload.get("text")) else {
        errors.insert(INVALID_JSON_FORMAT, INVALID_JSON_FORMAT_MESSAGE);
        return PostCheck {
            errors,
            author_id: None,
            fields: None,
        };
    };

    if !author_id.is_i64() {
        errors.insert("invalid_author_id_type", "author_id should be an integer");
    }
    if !text.is_string() {
        errors.insert("invalid_text_type", "text should be a string");
    }

    let author_id = author_id.as_i64();
    let fields = match (author_id, text.as_str()) {
        (Some(author_id), Some(text)) if errors.is_empty() => Some(NewPost {
            author_id,
            text: text.to_owned(),
        }),
        _ => None,
    };

    PostCheck {
        errors,
        author_id,
        fields,
    }
}
