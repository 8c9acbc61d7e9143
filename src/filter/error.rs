use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("Invalid sort field '{0}'; expected one of: title, content")]
    InvalidSortField(String),

    #[error("Invalid sort direction '{0}'; expected asc or desc")]
    InvalidDirection(String),

    #[error("Missing sort direction; expected asc or desc")]
    MissingDirection,
}
