//! SQLite implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use board_core::entities::Reaction;
use board_core::error::DomainError;
use board_core::traits::{ReactionRepository, RepoResult};
use board_core::validation::NewReaction;

use crate::models::ReactionModel;

use super::map_db_error;

/// SQLite implementation of ReactionRepository
#[derive(Clone)]
pub struct SqliteReactionRepository {
    pool: SqlitePool,
}

impl SqliteReactionRepository {
    /// Create a new SqliteReactionRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for SqliteReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT id, post_id, author_id, reaction
            FROM reactions
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, post_id: i64, new: &NewReaction) -> RepoResult<Reaction> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, ReactionModel>(
            r"
            INSERT INTO reactions (post_id, author_id, reaction)
            VALUES (?1, ?2, ?3)
            RETURNING id, post_id, author_id, reaction
            ",
        )
        .bind(post_id)
        .bind(new.user_id)
        .bind(&new.glyph)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("UPDATE posts SET total_reactions = total_reactions + 1 WHERE id = ?1")
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("UPDATE users SET total_reactions = total_reactions + 1 WHERE id = ?1")
            .bind(new.user_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(Reaction::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let reaction = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT id, post_id, author_id, reaction
            FROM reactions
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::ReactionNotFound(id))?;

        sqlx::query("UPDATE users SET total_reactions = total_reactions - 1 WHERE id = ?1")
            .bind(reaction.author_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("UPDATE posts SET total_reactions = total_reactions - 1 WHERE id = ?1")
            .bind(reaction.post_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM reactions WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn glyphs_by_post(&self, post_id: i64) -> RepoResult<Vec<String>> {
        let results = sqlx::query_scalar::<_, String>(
            "SELECT reaction FROM reactions WHERE post_id = ?1 ORDER BY id",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteReactionRepository>();
    }
}
