//! Service context - dependency container for services
//!
//! Holds the repositories and rendering configuration needed by services.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use board_core::traits::{PostRepository, ReactionRepository, UserRepository};
use board_db::SqlitePool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The database pool (for health probes)
/// - Database repositories
/// - The path the leaderboard chart is rendered to
#[derive(Clone)]
pub struct ServiceContext {
    pool: SqlitePool,
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    chart_output_path: PathBuf,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: SqlitePool,
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        chart_output_path: PathBuf,
    ) -> Self {
        Self {
            pool,
            user_repo,
            post_repo,
            reaction_repo,
            chart_output_path,
        }
    }

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the path the leaderboard chart is rendered to
    pub fn chart_output_path(&self) -> &Path {
        &self.chart_output_path
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("chart_output_path", &self.chart_output_path)
            .finish()
    }
}
