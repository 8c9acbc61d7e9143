// handlers/mod.rs - HTTP handlers
//
// posts:  /api/posts[/:id]  collection queries and mutations
// system: /, /health        service description and storage probe

pub mod posts;
pub mod system;

pub use system::{health, root};
