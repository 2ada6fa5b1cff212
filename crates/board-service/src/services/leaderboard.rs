//! Leaderboard service
//!
//! Produces the users leaderboard, either as a sorted list of users or as
//! a rendered PNG bar chart.

use serde_json::Value;
use tracing::{info, instrument};

use board_core::validation::{check_leaderboard, LeaderboardFormat};

use crate::chart;
use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Leaderboard in the representation the request asked for
#[derive(Debug)]
pub enum Leaderboard {
    /// Users sorted by reaction count
    List(Vec<UserResponse>),
    /// PNG-encoded bar chart of reaction counts
    Graph(Vec<u8>),
}

/// Leaderboard service
pub struct LeaderboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LeaderboardService<'a> {
    /// Create a new LeaderboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the leaderboard per the payload's `sort_type` and `data_type`
    #[instrument(skip(self, payload))]
    pub async fn leaderboard(&self, payload: &Value) -> ServiceResult<Leaderboard> {
        let query = check_leaderboard(payload)?;

        let users = self
            .ctx
            .user_repo()
            .list_by_total_reactions(query.sort)
            .await?;

        match query.format {
            LeaderboardFormat::List => {
                let mut responses = Vec::with_capacity(users.len());
                for user in &users {
                    let posts = self.ctx.post_repo().texts_by_author(user.id).await?;
                    responses.push(UserResponse::from_entity(user, posts));
                }
                Ok(Leaderboard::List(responses))
            }
            LeaderboardFormat::Graph => {
                let bars = chart::leaderboard_bars(&users);
                let path = self.ctx.chart_output_path().to_path_buf();

                // Rendering is blocking work; keep it off the async runtime
                let render_path = path.clone();
                tokio::task::spawn_blocking(move || chart::render_leaderboard(&bars, &render_path))
                    .await
                    .map_err(|e| ServiceError::Internal(e.into()))?
                    .map_err(|e| ServiceError::Internal(e.into()))?;

                let png = tokio::fs::read(&path)
                    .await
                    .map_err(|e| ServiceError::Internal(e.into()))?;

                info!(path = %path.display(), bytes = png.len(), "Leaderboard chart rendered");
                Ok(Leaderboard::Graph(png))
            }
        }
    }
}
