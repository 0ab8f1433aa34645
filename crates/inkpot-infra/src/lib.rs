//! # Inkpot Infrastructure
//!
//! Concrete implementations of the ports defined in `inkpot-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `database` - PostgreSQL and SQLite support via SeaORM

pub mod clock;
pub mod database;
pub mod memory;

pub use clock::SystemClock;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "database")]
pub use database::{DatabaseConfig, SeaOrmPostRepository};
