//! # Inkpot Shared
//!
//! Wire types shared by the server and its clients: the submitted post form and
//! the problem-details payload used for error pages.

pub mod dto;
pub mod response;

pub use dto::PostForm;
pub use response::ErrorResponse;
