//! End-to-end API tests
//!
//! Each test spawns its own server on an in-memory database and talks to
//! it over HTTP, asserting the exact wire contract: client-facing
//! failures are HTTP 200 bodies of `{"errors": {code: message}}`.

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use integration_tests::fixtures::{create_post, create_user, react, user_payload};
use integration_tests::helpers::{error_body, TestServer};

// === Health ===

#[tokio::test]
async fn test_health_endpoints() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server.get("/health").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body["status"], "healthy");

    let response = server.get("/health/ready").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body["checks"]["database"], true);

    Ok(())
}

// === User creation ===

#[tokio::test]
async fn test_create_user_returns_full_shape() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post("/users/create", &user_payload("Ada", "Lovelace", "ada@example.com"))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await?;
    assert_eq!(
        body,
        json!({
            "id": 1,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "total_reactions": 0,
            "posts": []
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_create_user_missing_field() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server.post("/users/create", &json!({"first_name": "x"})).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let errors = error_body(response).await?;
    assert_eq!(errors, json!({"invalid_json_format": "json format is invalid"}));

    Ok(())
}

#[tokio::test]
async fn test_create_user_wrong_content_type() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post_raw("/users/create", "text/plain", r#"{"first_name": "Ada"}"#)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let errors = error_body(response).await?;
    assert_eq!(
        errors["invalid_content_type"],
        "The content type should be application/json"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_user_malformed_json() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post_raw("/users/create", "application/json", "{not json")
        .await?;

    let errors = error_body(response).await?;
    assert_eq!(errors["invalid_json_format"], "json format is invalid");

    Ok(())
}

#[tokio::test]
async fn test_create_user_type_and_length_errors_coexist() -> Result<()> {
    let server = TestServer::start().await?;

    let payload = json!({
        "first_name": 5,
        "last_name": "x".repeat(101),
        "email": "ok@example.com"
    });
    let response = server.post("/users/create", &payload).await?;

    let errors = error_body(response).await?;
    assert_eq!(errors["invalid_first_name_type"], "first_name should be a string");
    assert_eq!(
        errors["invalid_last_name_length"],
        "last_name should be less than 100 characters long"
    );
    assert!(errors.get("invalid_email_format").is_none());

    Ok(())
}

#[tokio::test]
async fn test_create_user_bad_email_format() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post("/users/create", &user_payload("Ada", "Lovelace", "not-an-email"))
        .await?;

    let errors = error_body(response).await?;
    assert_eq!(errors["invalid_email_format"], "email format is invalid");

    Ok(())
}

#[tokio::test]
async fn test_create_user_duplicate_email() -> Result<()> {
    let server = TestServer::start().await?;
    create_user(&server, "Ada", "Lovelace", "ada@example.com").await?;

    let response = server
        .post("/users/create", &user_payload("Other", "Person", "ada@example.com"))
        .await?;

    let errors = error_body(response).await?;
    assert_eq!(errors["invalid_email"], "user with such email already exists");

    Ok(())
}

// === User lookup and deletion ===

#[tokio::test]
async fn test_get_user_not_found() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server.get("/users/999").await?;
    assert_eq!(response.status(), StatusCode::OK);

    let errors = error_body(response).await?;
    assert_eq!(errors["invalid_user_id"], "The user with such id doesn't exist");

    Ok(())
}

#[tokio::test]
async fn test_get_user_includes_post_texts() -> Result<()> {
    let server = TestServer::start().await?;
    let user_id = create_user(&server, "Ada", "Lovelace", "ada@example.com").await?;
    create_post(&server, user_id, "first").await?;
    create_post(&server, user_id, "second").await?;

    let body: Value = server.get(&format!("/users/{user_id}")).await?.json().await?;
    assert_eq!(body["posts"], json!(["first", "second"]));

    Ok(())
}

#[tokio::test]
async fn test_delete_user_cascades() -> Result<()> {
    let server = TestServer::start().await?;
    let owner = create_user(&server, "Ada", "Lovelace", "ada@example.com").await?;
    let fan = create_user(&server, "Alan", "Turing", "alan@example.com").await?;
    let post_id = create_post(&server, owner, "popular").await?;
    let reaction_id = react(&server, post_id, fan, "👍").await?;

    // The fan's counter reflects the reaction
    let body: Value = server.get(&format!("/users/{fan}")).await?.json().await?;
    assert_eq!(body["total_reactions"], 1);

    // Deleting the owner returns an empty 200 body
    let response = server.post_empty(&format!("/users/delete/{owner}")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await?.is_empty());

    // The owner, their post, and the reaction are gone
    let errors = error_body(server.get(&format!("/users/{owner}")).await?).await?;
    assert!(errors.get("invalid_user_id").is_some());
    let errors = error_body(server.get(&format!("/posts/{post_id}")).await?).await?;
    assert!(errors.get("invalid_post_id").is_some());
    let errors = error_body(server.get(&format!("/reactions/{reaction_id}")).await?).await?;
    assert!(errors.get("invalid_reaction_id").is_some());

    // The surviving user's counter was restored
    let body: Value = server.get(&format!("/users/{fan}")).await?.json().await?;
    assert_eq!(body["total_reactions"], 0);

    // A second delete reports the missing user
    let errors = error_body(server.post_empty(&format!("/users/delete/{owner}")).await?).await?;
    assert_eq!(errors["invalid_user_id"], "The user with such id doesn't exist");

    Ok(())
}

// === A user's posts ===

#[tokio::test]
async fn test_user_posts_sorted_by_reactions() -> Result<()> {
    let server = TestServer::start().await?;
    let author = create_user(&server, "Ada", "Lovelace", "ada@example.com").await?;
    let quiet = create_post(&server, author, "quiet").await?;
    let loud = create_post(&server, author, "loud").await?;
    react(&server, loud, author, "👍").await?;
    react(&server, loud, author, "🎉").await?;
    react(&server, quiet, author, "👍").await?;

    let body: Value = server
        .post(&format!("/users/{author}/posts"), &json!({"sort_type": "asc"}))
        .await?
        .json()
        .await?;
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts[0]["text"], "quiet");
    assert_eq!(posts[1]["text"], "loud");
    assert_eq!(posts[1]["reactions"], json!(["👍", "🎉"]));

    let body: Value = server
        .post(&format!("/users/{author}/posts"), &json!({"sort_type": "desc"}))
        .await?
        .json()
        .await?;
    assert_eq!(body["posts"][0]["text"], "loud");

    Ok(())
}

#[tokio::test]
async fn test_user_posts_unknown_user_wins_over_bad_body() -> Result<()> {
    let server = TestServer::start().await?;

    // No body, wrong content type, unknown user: the path check runs first
    let response = server.post_empty("/users/42/posts").await?;
    let errors = error_body(response).await?;
    assert_eq!(errors["invalid_user_id"], "The user with such id doesn't exist");

    Ok(())
}

#[tokio::test]
async fn test_user_posts_invalid_sort_type() -> Result<()> {
    let server = TestServer::start().await?;
    let author = create_user(&server, "Ada", "Lovelace", "ada@example.com").await?;

    let response = server
        .post(&format!("/users/{author}/posts"), &json!({"sort_type": "up"}))
        .await?;
    let errors = error_body(response).await?;
    assert_eq!(
        errors["invalid_sort_type"],
        "sort_type should be a string containing either 'asc' or 'desc'"
    );

    Ok(())
}

// === Leaderboard ===

#[tokio::test]
async fn test_leaderboard_list_ordering() -> Result<()> {
    let server = TestServer::start().await?;
    let quiet = create_user(&server, "Ada", "Lovelace", "ada@example.com").await?;
    let loud = create_user(&server, "Alan", "Turing", "alan@example.com").await?;
    let post_id = create_post(&server, quiet, "post").await?;
    react(&server, post_id, loud, "👍").await?;
    react(&server, post_id, loud, "🎉").await?;

    let body: Value = server
        .post("/users/leaderboard", &json!({"sort_type": "asc", "data_type": "list"}))
        .await?
        .json()
        .await?;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users[0]["id"].as_i64(), Some(quiet));
    assert_eq!(users[1]["id"].as_i64(), Some(loud));
    assert_eq!(users[1]["total_reactions"], 2);

    let body: Value = server
        .post("/users/leaderboard", &json!({"sort_type": "desc", "data_type": "list"}))
        .await?
        .json()
        .await?;
    assert_eq!(body["users"][0]["id"].as_i64(), Some(loud));

    Ok(())
}

#[tokio::test]
async fn test_leaderboard_graph_returns_png() -> Result<()> {
    let server = TestServer::start().await?;
    create_user(&server, "Ada", "Lovelace", "ada@example.com").await?;

    let response = server
        .post("/users/leaderboard", &json!({"sort_type": "desc", "data_type": "graph"}))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/png"
    );

    let bytes = response.bytes().await?;
    assert_eq!(&bytes[..4], b"\x89PNG");

    Ok(())
}

#[tokio::test]
async fn test_leaderboard_merged_errors() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post("/users/leaderboard", &json!({"sort_type": "up", "data_type": "chart"}))
        .await?;
    let errors = error_body(response).await?;
    assert_eq!(
        errors["invalid_sort_type"],
        "sort_type should be a string containing either 'asc' or 'desc'"
    );
    assert_eq!(
        errors["invalid_data_type"],
        "data_type should be a string containing either 'list' or 'graph'"
    );

    // Missing both keys reports the format error once
    let response = server.post("/users/leaderboard", &json!({})).await?;
    let errors = error_body(response).await?;
    assert_eq!(errors, json!({"invalid_json_format": "json format is invalid"}));

    Ok(())
}

// === Posts ===

#[tokio::test]
async fn test_create_post_unknown_author() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post("/posts/create", &json!({"author_id": 42, "text": "hello"}))
        .await?;
    let errors = error_body(response).await?;
    assert_eq!(errors["invalid_author_id"], "user with such id doesn't exist");

    Ok(())
}

#[tokio::test]
async fn test_post_shape_omits_counter() -> Result<()> {
    let server = TestServer::start().await?;
    let author = create_user(&server, "Ada", "Lovelace", "ada@example.com").await?;
    let post_id = create_post(&server, author, "hello").await?;
    react(&server, post_id, author, "👍").await?;

    let body: Value = server.get(&format!("/posts/{post_id}")).await?.json().await?;
    assert_eq!(
        body,
        json!({
            "id": post_id,
            "author_id": author,
            "text": "hello",
            "reactions": ["👍"]
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_delete_post_cascades() -> Result<()> {
    let server = TestServer::start().await?;
    let author = create_user(&server, "Ada", "Lovelace", "ada@example.com").await?;
    let fan = create_user(&server, "Alan", "Turing", "alan@example.com").await?;
    let post_id = create_post(&server, author, "hello").await?;
    let reaction_id = react(&server, post_id, fan, "👍").await?;

    let response = server.post_empty(&format!("/posts/delete/{post_id}")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await?.is_empty());

    // The reaction is gone and the fan's counter restored
    let errors = error_body(server.get(&format!("/reactions/{reaction_id}")).await?).await?;
    assert_eq!(
        errors["invalid_reaction_id"],
        "The reaction with such id doesn't exist"
    );
    let body: Value = server.get(&format!("/users/{fan}")).await?.json().await?;
    assert_eq!(body["total_reactions"], 0);

    // A second delete reports the missing post
    let errors = error_body(server.post_empty(&format!("/posts/delete/{post_id}")).await?).await?;
    assert_eq!(errors["invalid_post_id"], "The post with such id doesn't exist");

    Ok(())
}

// === Reactions ===

#[tokio::test]
async fn test_react_with_shortcode_and_counters() -> Result<()> {
    let server = TestServer::start().await?;
    let author = create_user(&server, "Ada", "Lovelace", "ada@example.com").await?;
    let fan = create_user(&server, "Alan", "Turing", "alan@example.com").await?;
    let post_id = create_post(&server, author, "hello").await?;

    // Short-codes are expanded to the emoji they name
    let response = server
        .post(
            &format!("/reactions/react/{post_id}"),
            &json!({"user_id": fan, "reaction": ":thumbsup:"}),
        )
        .await?;
    let body: Value = response.json().await?;
    assert_eq!(body, json!({"reaction_id": 1, "reaction": "👍"}));

    let body: Value = server.get("/reactions/1").await?.json().await?;
    assert_eq!(
        body,
        json!({"id": 1, "post_id": post_id, "author_id": fan, "reaction": "👍"})
    );

    let body: Value = server.get(&format!("/users/{fan}")).await?.json().await?;
    assert_eq!(body["total_reactions"], 1);

    // Deleting restores the counter
    let response = server.post_empty("/reactions/delete/1").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = server.get(&format!("/users/{fan}")).await?.json().await?;
    assert_eq!(body["total_reactions"], 0);

    Ok(())
}

#[tokio::test]
async fn test_react_rejects_plain_text() -> Result<()> {
    let server = TestServer::start().await?;
    let author = create_user(&server, "Ada", "Lovelace", "ada@example.com").await?;
    let post_id = create_post(&server, author, "hello").await?;

    let response = server
        .post(
            &format!("/reactions/react/{post_id}"),
            &json!({"user_id": author, "reaction": "nice"}),
        )
        .await?;
    let errors = error_body(response).await?;
    assert_eq!(
        errors["invalid_reaction"],
        "reaction should be a single emoji, or a string in the following format - :unicode_emoji_CLDR_short_name:"
    );

    Ok(())
}

#[tokio::test]
async fn test_react_missing_post_and_user_merge() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post("/reactions/react/42", &json!({"user_id": 99, "reaction": "👍"}))
        .await?;
    let errors = error_body(response).await?;
    assert_eq!(errors["invalid_post_id"], "post with such id doesn't exist");
    assert_eq!(errors["invalid_user_id"], "user with such id doesn't exist");

    Ok(())
}

#[tokio::test]
async fn test_reaction_not_found() -> Result<()> {
    let server = TestServer::start().await?;

    let errors = error_body(server.get("/reactions/5").await?).await?;
    assert_eq!(
        errors["invalid_reaction_id"],
        "The reaction with such id doesn't exist"
    );

    let errors = error_body(server.post_empty("/reactions/delete/5").await?).await?;
    assert_eq!(
        errors["invalid_reaction_id"],
        "The reaction with such id doesn't exist"
    );

    Ok(())
}
