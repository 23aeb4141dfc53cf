//! Content storage.

mod connections;
pub mod entity;
mod memory;
mod postgres_repo;

pub use connections::{DatabaseConfig, DatabasePool};
pub use memory::InMemoryContentRepository;
pub use postgres_repo::PostgresContentRepository;
