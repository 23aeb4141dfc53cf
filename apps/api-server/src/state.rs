//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::GenerationClient;
use quill_core::ports::ContentRepository;
use quill_infra::database::{DatabasePool, PostgresContentRepository};
use quill_infra::gemini::GeminiClient;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub contents: Arc<dyn ContentRepository>,
    pub generator: Arc<GenerationClient>,
}

impl AppState {
    /// Assemble state from already-built parts.
    pub fn from_parts(
        contents: Arc<dyn ContentRepository>,
        generator: Arc<GenerationClient>,
    ) -> Self {
        Self {
            contents,
            generator,
        }
    }

    /// Connect to the database, bring the schema up to date and build the
    /// Gemini-backed generator.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = DatabasePool::init(&config.database).await?;

        let contents: Arc<dyn ContentRepository> =
            Arc::new(PostgresContentRepository::new(pool.conn));
        contents.initialize().await?;

        let provider = Arc::new(GeminiClient::new(config.gemini.clone()));
        let generator = Arc::new(GenerationClient::new(
            provider,
            config.generation.clone(),
        ));

        tracing::info!(
            cache_selection = config.generation.cache_selection,
            "Application state initialized"
        );

        Ok(Self::from_parts(contents, generator))
    }
}
