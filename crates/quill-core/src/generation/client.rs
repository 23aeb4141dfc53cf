use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::ContentBrief;
use crate::error::GenerationError;
use crate::ports::TextProvider;

use super::prompt::build_prompt;
use super::selection::{DEFAULT_PREFERRED_MODELS, select_model};

/// Settings for model selection.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// Model names tried in order, without the `models/` prefix.
    pub preferred_models: Vec<String>,
    /// Reuse the selected model across requests until a generation fails.
    pub cache_selection: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            preferred_models: DEFAULT_PREFERRED_MODELS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            cache_selection: true,
        }
    }
}

/// Generates content for a brief through a [`TextProvider`].
///
/// Each call to [`generate`](Self::generate) makes exactly one generation
/// request. When selection caching is on, the chosen model is remembered and
/// dropped again as soon as a generation attempt fails, so the next request
/// lists models afresh.
pub struct GenerationClient {
    provider: Arc<dyn TextProvider>,
    settings: GenerationSettings,
    selected: RwLock<Option<String>>,
}

impl GenerationClient {
    pub fn new(provider: Arc<dyn TextProvider>, settings: GenerationSettings) -> Self {
        Self {
            provider,
            settings,
            selected: RwLock::new(None),
        }
    }

    /// Resolve the model to generate with.
    pub async fn select_model(&self) -> Result<String, GenerationError> {
        if self.settings.cache_selection {
            if let Some(model) = self.selected.read().await.as_ref() {
                return Ok(model.clone());
            }
        }

        let models = self.provider.list_models().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list models");
            GenerationError::ProviderUnavailable(e.to_string())
        })?;
        tracing::debug!(count = models.len(), "Provider listed models");

        let model = select_model(&models, &self.settings.preferred_models)?;

        if self.settings.cache_selection {
            *self.selected.write().await = Some(model.clone());
        }

        Ok(model)
    }

    /// Generate the body text for a brief.
    pub async fn generate(&self, brief: &ContentBrief) -> Result<String, GenerationError> {
        let model = self.select_model().await?;
        let prompt = build_prompt(brief);

        match self.provider.generate_text(&model, &prompt).await {
            Ok(Some(text)) => {
                tracing::debug!(model = %model, chars = text.len(), "Content generated");
                Ok(text)
            }
            Ok(None) => {
                self.invalidate().await;
                Err(GenerationError::GenerationFailed(
                    "provider returned no candidates".to_string(),
                ))
            }
            Err(e) => {
                self.invalidate().await;
                Err(GenerationError::GenerationFailed(e.to_string()))
            }
        }
    }

    async fn invalidate(&self) {
        if self.settings.cache_selection {
            self.selected.write().await.take();
        }
    }
}
