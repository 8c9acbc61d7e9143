use anyhow::{anyhow, bail, Context};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;

use crate::store::Post;

/// Thin reqwest wrapper over the `/api/posts` endpoints.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    pub async fn list(&self, sort: Option<(&str, &str)>) -> anyhow::Result<Vec<Post>> {
        let mut req = self.request(Method::GET, "/posts");
        if let Some((field, direction)) = sort {
            req = req.query(&[("sort", field), ("direction", direction)]);
        }
        decode(req).await
    }

    pub async fn search(&self, title: Option<&str>, content: Option<&str>) -> anyhow::Result<Vec<Post>> {
        let mut params = Vec::new();
        if let Some(t) = title {
            params.push(("title", t));
        }
        if let Some(c) = content {
            params.push(("content", c));
        }
        decode(self.request(Method::GET, "/posts/search").query(&params)).await
    }

    pub async fn create(&self, title: &str, content: &str) -> anyhow::Result<Post> {
        let body = PostBody { title: Some(title), content: Some(content) };
        decode(self.request(Method::POST, "/posts").json(&body)).await
    }

    pub async fn update(&self, id: u64, title: Option<&str>, content: Option<&str>) -> anyhow::Result<Post> {
        let body = PostBody { title, content };
        decode(self.request(Method::PUT, &format!("/posts/{}", id)).json(&body)).await
    }

    pub async fn delete(&self, id: u64) -> anyhow::Result<String> {
        let body: Value = decode(self.request(Method::DELETE, &format!("/posts/{}", id))).await?;
        body.get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("unexpected delete response: {}", body))
    }
}

#[derive(Serialize)]
struct PostBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

async fn decode<T: serde::de::DeserializeOwned>(req: RequestBuilder) -> anyhow::Result<T> {
    let response = req.send().await.context("request to Blog API failed")?;
    let response = error_for_status(response).await?;
    response.json::<T>().await.context("failed to decode response")
}

/// Turn a non-2xx response into an error carrying the server's message.
async fn error_for_status(response: Response) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| status.to_string());
    bail!("{} ({})", message, status.as_u16())
}
