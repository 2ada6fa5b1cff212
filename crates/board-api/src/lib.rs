//! # board-api
//!
//! HTTP layer - Axum handlers, routes, and server setup.
//!
//! ## Overview
//!
//! This crate exposes the REST API:
//!
//! - Users: create, fetch, cascade delete, list posts, leaderboard
//! - Posts: create, fetch, cascade delete
//! - Reactions: react to a post, fetch, delete
//! - Health probes
//!
//! Client-facing failures (validation, missing rows, bad content type)
//! are reported as HTTP 200 bodies of the form
//! `{"errors": {code: message}}`; only internal failures surface as 500.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
