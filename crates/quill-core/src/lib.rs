//! # Quill Core
//!
//! The domain layer of Quill.
//! This crate contains the content model, the ports infrastructure must
//! implement, and the provider-agnostic generation logic. It performs no I/O
//! of its own.

pub mod domain;
pub mod error;
pub mod generation;
pub mod ports;

pub use error::{DomainError, GenerationError, RepoError};
pub use generation::{GenerationClient, GenerationSettings};
