//! # board-db
//!
//! Database layer implementing the repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for the repository traits
//! defined in `board-core`. It handles:
//!
//! - Connection pool management
//! - Embedded schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ model mappers
//! - Repository implementations, including the counter-propagation and
//!   cascade-delete transactions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use board_db::pool::{create_pool, DatabaseConfig};
//! use board_db::repositories::SqliteUserRepository;
//! use board_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     board_db::MIGRATOR.run(&pool).await?;
//!     let user_repo = SqliteUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

/// Embedded schema migrations
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, SqlitePool};
pub use repositories::{SqlitePostRepository, SqliteReactionRepository, SqliteUserRepository};
