//! # Inkpot Core
//!
//! The domain layer of the Inkpot blog.
//! This crate contains the post model, its validation rules and the post store,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;
pub mod validation;

pub use error::DomainError;
pub use store::PostStore;
