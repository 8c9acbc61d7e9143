mod common;

use anyhow::Result;
use common::{ids, seed_posts, TestServer};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn title_search_is_case_insensitive() -> Result<()> {
    let server = TestServer::start_with_posts(seed_posts()).await?;

    let res = server.client.get(server.url("/posts/search?title=first")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(ids(&res.json::<Value>().await?), vec![1]);
    Ok(())
}

#[tokio::test]
async fn no_terms_returns_everything() -> Result<()> {
    let server = TestServer::start_with_posts(seed_posts()).await?;

    let res = server.client.get(server.url("/posts/search")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, seed_posts());
    Ok(())
}

#[tokio::test]
async fn title_and_content_terms_are_alternatives() -> Result<()> {
    let server = TestServer::start_with_posts(seed_posts()).await?;

    // title matches post 1 only, content matches post 2 only
    let res = server
        .client
        .get(server.url("/posts/search?title=FIRST&content=second%20post"))
        .send()
        .await?;
    assert_eq!(ids(&res.json::<Value>().await?), vec![1, 2]);
    Ok(())
}

#[tokio::test]
async fn content_search_without_match_is_empty() -> Result<()> {
    let server = TestServer::start_with_posts(seed_posts()).await?;

    let res = server.client.get(server.url("/posts/search?content=rust")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(ids(&res.json::<Value>().await?).is_empty());
    Ok(())
}

#[tokio::test]
async fn repeated_terms_use_the_first_value() -> Result<()> {
    let server = TestServer::start_with_posts(seed_posts()).await?;

    let res = server
        .client
        .get(server.url("/posts/search?title=second&title=first"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(ids(&res.json::<Value>().await?), vec![2]);
    Ok(())
}

#[tokio::test]
async fn other_methods_on_search_are_not_found() -> Result<()> {
    let server = TestServer::start_with_posts(seed_posts()).await?;
    let before = server.stored_raw();

    let res = server.client.delete(server.url("/posts/search")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["code"], "NOT_FOUND");
    assert_eq!(server.stored_raw(), before);
    Ok(())
}
