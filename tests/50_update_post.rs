mod common;

use anyhow::Result;
use common::{seed_posts, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn unknown_id_is_not_found() -> Result<()> {
    let server = TestServer::start_with_posts(seed_posts()).await?;
    let before = server.stored_raw();

    let res = server
        .client
        .put(server.url("/posts/999"))
        .json(&json!({"title": "nope"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["code"], "NOT_FOUND");
    assert_eq!(server.stored_raw(), before);
    Ok(())
}

#[tokio::test]
async fn updates_only_given_fields() -> Result<()> {
    let server = TestServer::start_with_posts(seed_posts()).await?;

    let res = server
        .client
        .put(server.url("/posts/1"))
        .json(&json!({"content": "new"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let expected = json!({"id": 1, "title": "First post", "content": "new"});
    assert_eq!(res.json::<Value>().await?, expected);

    let stored = server.stored_posts()?;
    assert_eq!(stored[0], expected);
    assert_eq!(stored[1], seed_posts()[1]);
    Ok(())
}

#[tokio::test]
async fn unrecognized_fields_are_ignored() -> Result<()> {
    let server = TestServer::start_with_posts(seed_posts()).await?;

    let res = server
        .client
        .put(server.url("/posts/2"))
        .json(&json!({"author": "someone", "id": 50}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, seed_posts()[1]);
    assert_eq!(server.stored_posts()?, seed_posts());
    Ok(())
}

#[tokio::test]
async fn empty_title_is_rejected_without_writing() -> Result<()> {
    let server = TestServer::start_with_posts(seed_posts()).await?;
    let before = server.stored_raw();

    let res = server
        .client
        .put(server.url("/posts/1"))
        .json(&json!({"title": "", "content": "still here"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"].get("title").is_some(), "unexpected body: {}", body);
    assert!(body["field_errors"].get("content").is_none(), "unexpected body: {}", body);
    assert_eq!(server.stored_raw(), before);
    Ok(())
}
