//! # board-service
//!
//! Application layer - business logic and use cases.
//!
//! ## Overview
//!
//! This crate sits between the HTTP layer and the repositories. It:
//!
//! - Composes the pure payload checks from `board-core` with the
//!   referential lookups (author/user/post existence, email uniqueness)
//!   that need a database
//! - Runs the use cases: user/post/reaction CRUD, cascade deletes, and
//!   the reaction leaderboard
//! - Renders the leaderboard bar chart to a PNG
//! - Maps entities to response DTOs

pub mod chart;
pub mod dto;
pub mod services;

pub use dto::{
    HealthResponse, PostResponse, ReactionCreatedResponse, ReactionResponse, ReadinessResponse,
    UserResponse,
};
pub use services::{
    Leaderboard, LeaderboardService, PostService, ReactionService, ServiceContext, ServiceError,
    ServiceResult, UserService,
};
