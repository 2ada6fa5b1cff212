//! Reaction entity - an emoji attached to a post by a user

/// Reaction entity
///
/// The glyph is always stored normalized: a single emoji grapheme, never a
/// `:short_code:` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub glyph: String,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(id: i64, post_id: i64, author_id: i64, glyph: String) -> Self {
        Self {
            id,
            post_id,
            author_id,
            glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_creation() {
        let reaction = Reaction::new(1, 2, 3, "👍".to_string());
        assert_eq!(reaction.post_id, 2);
        assert_eq!(reaction.author_id, 3);
        assert_eq!(reaction.glyph, "👍");
    }
}
