use super::types::SearchQuery;
use crate::store::Post;

/// Case-insensitive substring search on title and content.
///
/// A post matches when *either* supplied term is found in its field. Blank
/// terms are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterWhere {
    title: Option<String>,
    content: Option<String>,
}

impl FilterWhere {
    /// `None` when the query has no usable term, meaning "return everything".
    pub fn from_query(query: &SearchQuery) -> Option<Self> {
        let title = normalize(query.title.as_deref());
        let content = normalize(query.content.as_deref());
        if title.is_none() && content.is_none() {
            return None;
        }
        Some(FilterWhere { title, content })
    }

    pub fn matches(&self, post: &Post) -> bool {
        let hit = |term: &Option<String>, field: &str| {
            term.as_deref()
                .is_some_and(|t| field.to_lowercase().contains(t))
        };
        hit(&self.title, &post.title) || hit(&self.content, &post.content)
    }

    pub fn apply(&self, posts: Vec<Post>) -> Vec<Post> {
        posts.into_iter().filter(|p| self.matches(p)).collect()
    }
}

fn normalize(term: Option<&str>) -> Option<String> {
    term.filter(|t| !t.trim().is_empty()).map(str::to_lowercase)
}
