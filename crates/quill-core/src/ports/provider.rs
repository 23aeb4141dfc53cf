use async_trait::async_trait;

/// Generation method a model must support to be usable for text.
pub const GENERATE_CONTENT_METHOD: &str = "generateContent";

/// A model advertised by a text provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// Provider identifier, e.g. `models/gemini-1.5-flash`.
    pub name: String,
    pub supported_methods: Vec<String>,
}

impl ModelInfo {
    pub fn new(name: impl Into<String>, supported_methods: &[&str]) -> Self {
        Self {
            name: name.into(),
            supported_methods: supported_methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Text-capable and not an image/vision model.
    pub fn is_text_capable(&self) -> bool {
        self.supported_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT_METHOD)
            && !self.name.contains("vision")
    }

    /// Name without the `models/` resource prefix.
    pub fn short_name(&self) -> &str {
        self.name.strip_prefix("models/").unwrap_or(&self.name)
    }
}

/// Text provider - abstraction over a hosted generative-text API.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// List every model the provider currently exposes.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError>;

    /// Run a single generation call.
    ///
    /// Returns the first candidate's text, or `None` when the provider
    /// answered without any candidate.
    async fn generate_text(&self, model: &str, prompt: &str)
    -> Result<Option<String>, ProviderError>;
}

/// Text provider errors.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}
