#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::Value;

/// A server process with its own port and post file, killed on drop.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub data_file: PathBuf,
    pub client: reqwest::Client,
    child: Child,
}

impl TestServer {
    /// Start against a missing post file.
    pub async fn start() -> Result<Self> {
        Self::start_with_file_contents(None).await
    }

    /// Start with `posts` already stored.
    pub async fn start_with_posts(posts: Value) -> Result<Self> {
        let raw = serde_json::to_string_pretty(&posts)?;
        Self::start_with_file_contents(Some(&raw)).await
    }

    /// Start with raw file contents, which need not be valid JSON.
    pub async fn start_with_file_contents(contents: Option<&str>) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let data_file = std::env::temp_dir().join(format!("blog-api-test-{}.json", port));
        let _ = std::fs::remove_file(&data_file);
        if let Some(contents) = contents {
            std::fs::write(&data_file, contents).context("failed to seed post file")?;
        }

        let child = Command::new(env!("CARGO_BIN_EXE_blog-api"))
            .env("BLOG_API_HOST", "127.0.0.1")
            .env("BLOG_API_PORT", port.to_string())
            .env("BLOG_DATA_FILE", &data_file)
            .env("RUST_LOG", "warn")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .context("failed to spawn server binary")?;

        let server = Self {
            port,
            base_url,
            data_file,
            client: reqwest::Client::new(),
            child,
        };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = self.client.get(&url).send().await {
                // A corrupt post file reports 503 but the server is up
                if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// The post file as the server last wrote it.
    pub fn stored_posts(&self) -> Result<Value> {
        let raw = std::fs::read_to_string(&self.data_file).context("post file missing")?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn stored_raw(&self) -> Option<String> {
        std::fs::read_to_string(&self.data_file).ok()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let _ = std::fs::remove_file(&self.data_file);
    }
}

/// Ids of a JSON array of posts, in order.
pub fn ids(posts: &Value) -> Vec<u64> {
    posts
        .as_array()
        .map(|arr| arr.iter().filter_map(|p| p["id"].as_u64()).collect())
        .unwrap_or_default()
}

/// Two posts as stored by a fresh install.
pub fn seed_posts() -> Value {
    serde_json::json!([
        {"id": 1, "title": "First post", "content": "This is the first post."},
        {"id": 2, "title": "Second post", "content": "This is the second post."}
    ])
}
