//! SQLite implementation of PostRepository

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::instrument;

use board_core::entities::Post;
use board_core::error::DomainError;
use board_core::traits::{PostRepository, RepoResult};
use board_core::validation::{NewPost, SortOrder};

use crate::models::PostModel;

use super::map_db_error;

/// SQLite implementation of PostRepository
#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    /// Create a new SqlitePostRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Delete a post and all its reactions inside the caller's transaction,
/// decrementing each reaction-author's counter once per reaction. The post's
/// own counter needs no adjustment: the row is removed with it.
pub(crate) async fn cascade_delete_post(
    tx: &mut Transaction<'_, Sqlite>,
    post_id: i64,
) -> RepoResult<()> {
    let reaction_authors: Vec<i64> =
        sqlx::query_scalar("SELECT author_id FROM reactions WHERE post_id = ?1")
            .bind(post_id)
            .fetch_all(&mut **tx)
            .await
            .map_err(map_db_error)?;

    for author_id in reaction_authors {
        sqlx::query("UPDATE users SET total_reactions = total_reactions - 1 WHERE id = ?1")
            .bind(author_id)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;
    }

    sqlx::query("DELETE FROM reactions WHERE post_id = ?1")
        .bind(post_id)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

    sqlx::query("DELETE FROM posts WHERE id = ?1")
        .bind(post_id)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

    Ok(())
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, author_id, text, total_reactions
            FROM posts
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM posts WHERE id = ?1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, new: &NewPost) -> RepoResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (author_id, text)
            VALUES (?1, ?2)
            RETURNING id, author_id, text, total_reactions
            ",
        )
        .bind(new.author_id)
        .bind(&new.text)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self))]
    async fn delete_cascading(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM posts WHERE id = ?1)",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if !exists {
            return Err(DomainError::PostNotFound(id));
        }

        cascade_delete_post(&mut tx, id).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_author(&self, author_id: i64, order: SortOrder) -> RepoResult<Vec<Post>> {
        // ORDER BY direction cannot be bound; the keyword comes from the
        // SortOrder enum, never from request input.
        let query = format!(
            r"
            SELECT id, author_id, text, total_reactions
            FROM posts
            WHERE author_id = ?1
            ORDER BY total_reactions {}
            ",
            order.sql_keyword()
        );

        let results = sqlx::query_as::<_, PostModel>(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn texts_by_author(&self, author_id: i64) -> RepoResult<Vec<String>> {
        let results = sqlx::query_scalar::<_, String>(
            "SELECT text FROM posts WHERE author_id = ?1 ORDER BY id",
        )
        .bind(author_id)
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
        assert_send_sync::<SqlitePostRepository>();
    }
}
