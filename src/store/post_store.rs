use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, error};

use super::error::{StoreError, StoreResult};
use super::models::Post;

/// The post collection, persisted as a single JSON file.
pub struct PostStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl PostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole collection.
    ///
    /// A missing or blank file is an empty collection. Anything else that
    /// fails to parse is reported as `StoreError::Corrupt` and left on disk.
    pub async fn load(&self) -> StoreResult<Vec<Post>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("post file {} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                error!("failed to read post file {}: {}", self.path.display(), e);
                return Err(StoreError::file_io(&self.path, e));
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            error!("post file {} is corrupt: {}", self.path.display(), e);
            StoreError::corrupt(&self.path, e.to_string())
        })
    }

    /// Replace the file with `posts`, pretty-printed.
    pub async fn save(&self, posts: &[Post]) -> StoreResult<()> {
        let mut data = serde_json::to_vec_pretty(posts)?;
        data.push(b'\n');

        if let Err(e) = self.write_atomic(&data).await {
            error!("failed to save posts: {}", e);
            return Err(e);
        }
        debug!("saved {} posts to {}", posts.len(), self.path.display());
        Ok(())
    }

    /// Write to a uniquely named sibling, fsync, then rename over the target.
    async fn write_atomic(&self, data: &[u8]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::file_io(parent, e))?;
        }

        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("posts.json");
        let temp_path = self
            .path
            .with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4().simple()));

        let result = async {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::file_io(&temp_path, e))?;
            file.write_all(data)
                .await
                .map_err(|e| StoreError::file_io(&temp_path, e))?;
            file.sync_all()
                .await
                .map_err(|e| StoreError::file_io(&temp_path, e))?;
            fs::rename(&temp_path, &self.path)
                .await
                .map_err(|e| StoreError::file_io(&self.path, e))
        }
        .await;

        if result.is_err() {
            let _ = fs::remove_file(&temp_path).await;
        }
        result
    }

    /// Next free id: one past the largest id in use, or 1 when empty.
    ///
    /// Fails once the largest id is `u64::MAX`.
    pub fn next_id(posts: &[Post]) -> StoreResult<u64> {
        match posts.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted),
        }
    }

    /// Snapshot of the collection for read-only requests.
    ///
    /// No lock is taken; saves replace the file atomically so a reader sees
    /// either the old or the new collection.
    pub async fn read(&self) -> StoreResult<Vec<Post>> {
        self.load().await
    }

    /// Run one read-modify-write cycle under the store's write lock.
    ///
    /// The collection is saved only when `op` returns `Ok`.
    pub async fn mutate<T, E, F>(&self, op: F) -> Result<T, E>
    where
        F: FnOnce(&mut Vec<Post>) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.load().await?;
        let out = op(&mut posts)?;
        self.save(&posts).await?;
        Ok(out)
    }
}
