//! Fixture helpers for integration tests
//!
//! Creates users, posts, and reactions through the public API so tests
//! exercise the same code paths as real clients.

use anyhow::Result;
use serde_json::{json, Value};

use crate::helpers::TestServer;

/// Build a valid user-creation payload
pub fn user_payload(first_name: &str, last_name: &str, email: &str) -> Value {
    json!({
        "first_name": first_name,
        "last_name": last_name,
        "email": email,
    })
}

/// Create a user and return its id
pub async fn create_user(
    server: &TestServer,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<i64> {
    let response = server
        .post("/users/create", &user_payload(first_name, last_name, email))
        .await?;
    let body: Value = response.json().await?;
    body.get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| anyhow::anyhow!("user creation failed: {body}"))
}

/// Create a post and return its id
pub async fn create_post(server: &TestServer, author_id: i64, text: &str) -> Result<i64> {
    let response = server
        .post("/posts/create", &json!({"author_id": author_id, "text": text}))
        .await?;
    let body: Value = response.json().await?;
    body.get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| anyhow::anyhow!("post creation failed: {body}"))
}

/// React to a post and return the reaction id
pub async fn react(server: &TestServer, post_id: i64, user_id: i64, reaction: &str) -> Result<i64> {
    let response = server
        .post(
            &format!("/reactions/react/{post_id}"),
            &json!({"user_id": user_id, "reaction": reaction}),
        )
        .await?;
    let body: Value = response.json().await?;
    body.get("reaction_id")
        .and_then(Value::as_i64)
        .ok_or_else(|| anyhow::anyhow!("reaction failed: {body}"))
}
