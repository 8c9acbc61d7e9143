use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A blog post as stored on disk and returned over the API.
///
/// Fields beyond `id`, `title` and `content` are carried in `extra` and
/// written back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewPost {
    /// Names of required fields that are absent or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.as_deref().map_or(true, str::is_empty) {
            missing.push("title");
        }
        if self.content.as_deref().map_or(true, str::is_empty) {
            missing.push("content");
        }
        missing
    }

    /// Build the stored post. Callers check `missing_fields` first.
    pub fn into_post(self, id: u64) -> Post {
        let mut extra = self.extra;
        // the server owns ids
        extra.remove("id");
        Post {
            id,
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            extra,
        }
    }
}

/// Body of `PUT /api/posts/:id`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Names of fields that are present but empty.
    pub fn empty_fields(&self) -> Vec<&'static str> {
        let mut empty = Vec::new();
        if self.title.as_deref() == Some("") {
            empty.push("title");
        }
        if self.content.as_deref() == Some("") {
            empty.push("content");
        }
        empty
    }

    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}
