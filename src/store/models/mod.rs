pub mod post;

pub use post::{NewPost, Post, PostPatch};
