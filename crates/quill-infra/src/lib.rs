//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! PostgreSQL storage via SeaORM, an in-memory store, and the Gemini
//! text provider.

pub mod database;
pub mod gemini;

pub use database::{
    DatabaseConfig, DatabasePool, InMemoryContentRepository, PostgresContentRepository,
};
pub use gemini::{GeminiClient, GeminiConfig};
