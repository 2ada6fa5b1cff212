//! Post entity <-> model mapper

use board_core::entities::Post;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            author_id: model.author_id,
            text: model.text,
            total_reactions: model.total_reactions,
        }
    }
}
