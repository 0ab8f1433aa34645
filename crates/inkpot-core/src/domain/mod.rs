//! Domain entities - the core business objects.

mod post;

pub use post::{DATE_FORMAT, NewPost, Post, PostFields, PostId, format_publication_date};
