use async_trait::async_trait;

use crate::domain::{Content, NewContent};
use crate::error::RepoError;

/// Content repository - the persistence boundary for generated content.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Ensure the backing schema exists. Safe to call more than once.
    async fn initialize(&self) -> Result<(), RepoError>;

    /// Persist a new record and return it with its assigned id.
    async fn create(&self, content: NewContent) -> Result<Content, RepoError>;

    /// Every stored record, oldest first.
    async fn list_all(&self) -> Result<Vec<Content>, RepoError>;
}
