pub mod collection;
pub mod record;

// Re-export handler functions for use in routing
pub use collection::create as posts_create;
pub use collection::list as posts_list;
pub use collection::search as posts_search;

pub use record::delete as post_delete;
pub use record::search_as_id as post_search_as_id;
pub use record::update as post_update;
