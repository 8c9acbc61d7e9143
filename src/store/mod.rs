//! File-backed post storage.
//!
//! The whole collection lives in one JSON array. Every operation loads the
//! file fresh; mutations rewrite it wholesale via temp file + rename.
//!
//! Writers are serialized per process only. Several processes sharing one
//! file will clobber each other.

pub mod error;
pub mod models;
pub mod post_store;

pub use error::{StoreError, StoreResult};
pub use models::{NewPost, Post, PostPatch};
pub use post_store::PostStore;
