//! SQLite implementation of UserRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use board_core::entities::User;
use board_core::error::DomainError;
use board_core::traits::{RepoResult, UserRepository};
use board_core::validation::{NewUser, SortOrder};

use crate::models::UserModel;

use super::{cascade_delete_post, map_db_error, map_unique_violation};

/// SQLite implementation of UserRepository
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new SqliteUserRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, last_name, email, total_reactions
            FROM users
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, new: &NewUser) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (first_name, last_name, email)
            VALUES (?1, ?2, ?3)
            RETURNING id, first_name, last_name, email, total_reactions
            ",
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    async fn delete_cascading(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1)",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if !exists {
            return Err(DomainError::UserNotFound(id));
        }

        let post_ids: Vec<i64> =
            sqlx::query_scalar("SELECT id FROM posts WHERE author_id = ?1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await
                .map_err(map_db_error)?;

        for post_id in post_ids {
            cascade_delete_post(&mut tx, post_id).await?;
        }

        sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_total_reactions(&self, order: SortOrder) -> RepoResult<Vec<User>> {
        // ORDER BY direction cannot be bound; the keyword comes from the
        // SortOrder enum, never from request input.
        let query = format!(
            r"
            SELECT id, first_name, last_name, email, total_reactions
            FROM users
            ORDER BY total_reactions {}
            ",
            order.sql_keyword()
        );

        let results = sqlx::query_as::<_, UserModel>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteUserRepository>();
    }
}
