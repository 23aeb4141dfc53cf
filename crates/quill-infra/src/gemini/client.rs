use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use quill_core::ports::{ModelInfo, ProviderError, TextProvider};

use super::types::{
    ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, ListModelsResponse,
};

/// Public Generative Language endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";
const PAGE_SIZE: &str = "1000";

/// Configuration for the Gemini client.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Gemini REST client.
///
/// The key travels in a header rather than the query string so request URLs
/// are safe to log. No client-side timeout is applied.
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(api_error(status, &bytes));
        }

        serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

fn api_error(status: StatusCode, body: &[u8]) -> ProviderError {
    let message = serde_json::from_slice::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    ProviderError::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl TextProvider for GeminiClient {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(self.url("models"))
                .header(API_KEY_HEADER, &self.config.api_key)
                .query(&[("pageSize", PAGE_SIZE)]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| ProviderError::Transport(e.to_string()))?;
            let page: ListModelsResponse = Self::decode(response).await?;

            models.extend(page.models.into_iter().map(ModelInfo::from));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(models)
    }

    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<Option<String>, ProviderError> {
        let model = model.strip_prefix("models/").unwrap_or(model);
        tracing::debug!(model = %model, "Calling generateContent");

        let response = self
            .client
            .post(self.url(&format!("models/{model}:generateContent")))
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let body: GenerateContentResponse = Self::decode(response).await?;
        Ok(body.into_first_text())
    }
}
