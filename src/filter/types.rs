use serde::Deserialize;

use crate::store::Post;

/// Decoded query string pairs, in request order.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `key`; later repeats are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// Query string of `GET /api/posts`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl ListQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            sort: first_value(pairs, "sort"),
            direction: first_value(pairs, "direction"),
        }
    }
}

/// Query string of `GET /api/posts/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl SearchQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            title: first_value(pairs, "title"),
            content: first_value(pairs, "content"),
        }
    }
}

/// Post fields that can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "title" => Some(SortField::Title),
            "content" => Some(SortField::Content),
            _ => None,
        }
    }

    pub fn value<'a>(&self, post: &'a Post) -> &'a str {
        match self {
            SortField::Title => &post.title,
            SortField::Content => &post.content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_repeated_keys_keep_first_value() {
        let query = SearchQuery::from_pairs(&pairs(&[("title", "first"), ("title", "x")]));
        assert_eq!(query.title.as_deref(), Some("first"));
        assert_eq!(query.content, None);

        let query = ListQuery::from_pairs(&pairs(&[
            ("sort", "title"),
            ("direction", "asc"),
            ("sort", "content"),
        ]));
        assert_eq!(query.sort.as_deref(), Some("title"));
        assert_eq!(query.direction.as_deref(), Some("asc"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let query = ListQuery::from_pairs(&pairs(&[("page", "2")]));
        assert!(query.sort.is_none() && query.direction.is_none());
    }
}
