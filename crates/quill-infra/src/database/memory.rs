//! In-memory content repository - used by tests and local harnesses.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Content, NewContent};
use quill_core::error::RepoError;
use quill_core::ports::ContentRepository;

struct Store {
    next_id: i64,
    rows: Vec<Content>,
}

/// In-memory content store with sequential ids starting at 1.
///
/// Note: Data is lost on process restart.
pub struct InMemoryContentRepository {
    store: RwLock<Store>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn initialize(&self) -> Result<(), RepoError> {
        Ok(())
    }

    async fn create(&self, content: NewContent) -> Result<Content, RepoError> {
        let mut store = self.store.write().await;

        let stored = Content::stored(store.next_id, content);
        store.next_id += 1;
        store.rows.push(stored.clone());

        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Content>, RepoError> {
        Ok(self.store.read().await.rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use quill_core::domain::ContentBrief;

    use super::*;

    fn new_content(title: &str) -> NewContent {
        NewContent::new(
            ContentBrief {
                title: title.to_string(),
                keywords: "k".to_string(),
                content_type: "article".to_string(),
                tone: "formal".to_string(),
                audience: "general".to_string(),
                length: "medium".to_string(),
            },
            format!("Body of {title}"),
        )
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let repo = InMemoryContentRepository::new();
        repo.initialize().await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_listed_in_order() {
        let repo = InMemoryContentRepository::new();

        let first = repo.create(new_content("first")).await.unwrap();
        let second = repo.create(new_content("second")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }
}
