use super::error::FilterError;
use super::types::{ListQuery, SortDirection, SortField};
use crate::store::Post;

/// A validated `sort`/`direction` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl FilterOrder {
    /// `Ok(None)` when no sort was requested. `direction` alone is ignored.
    pub fn from_query(query: &ListQuery) -> Result<Option<Self>, FilterError> {
        let Some(sort) = query.sort.as_deref() else {
            return Ok(None);
        };

        let field =
            SortField::parse(sort).ok_or_else(|| FilterError::InvalidSortField(sort.to_string()))?;

        let direction = match query.direction.as_deref() {
            None => return Err(FilterError::MissingDirection),
            Some(d) => {
                SortDirection::parse(d).ok_or_else(|| FilterError::InvalidDirection(d.to_string()))?
            }
        };

        Ok(Some(FilterOrder { field, direction }))
    }

    /// Stable, case-sensitive sort. Equal keys keep storage order in both
    /// directions.
    pub fn apply(&self, posts: &mut [Post]) {
        let field = self.field;
        match self.direction {
            SortDirection::Asc => posts.sort_by(|a, b| field.value(a).cmp(field.value(b))),
            SortDirection::Desc => posts.sort_by(|a, b| field.value(b).cmp(field.value(a))),
        }
    }
}
