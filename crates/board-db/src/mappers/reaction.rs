//! Reaction entity <-> model mapper

use board_core::entities::Reaction;

use crate::models::ReactionModel;

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: model.id,
            post_id: model.post_id,
            author_id: model.author_id,
            glyph: model.reaction,
        }
    }
}
