//! Database connection management and SeaORM repositories.

mod connections;

#[cfg(feature = "database")]
mod base;
#[cfg(feature = "database")]
pub mod entity;
#[cfg(feature = "database")]
mod post_repo;

pub use connections::DatabaseConfig;

#[cfg(feature = "database")]
pub use connections::{backend_name, connect};
#[cfg(feature = "database")]
pub use post_repo::SeaOrmPostRepository;

#[cfg(feature = "database")]
#[cfg(test)]
mod tests;
