//! Wire types for the Generative Language `v1beta` API.

use serde::{Deserialize, Serialize};

use quill_core::ports::ModelInfo;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<ApiModel>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiModel {
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl From<ApiModel> for ModelInfo {
    fn from(model: ApiModel) -> Self {
        Self {
            name: model.name,
            supported_methods: model.supported_generation_methods,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest<'a> {
    pub contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestContent<'a> {
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestPart<'a> {
    pub text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_model_listing() {
        let body = r#"{
            "models": [
                {
                    "name": "models/gemini-1.5-flash",
                    "displayName": "Gemini 1.5 Flash",
                    "supportedGenerationMethods": ["generateContent", "countTokens"]
                },
                { "name": "models/embedding-001" }
            ],
            "nextPageToken": "abc"
        }"#;

        let listing: ListModelsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(listing.next_page_token.as_deref(), Some("abc"));

        let models: Vec<ModelInfo> = listing.models.into_iter().map(Into::into).collect();
        assert!(models[0].is_text_capable());
        assert_eq!(models[0].short_name(), "gemini-1.5-flash");
        assert!(models[1].supported_methods.is_empty());
    }

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hi")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hi" }] }] })
        );
    }

    #[test]
    fn test_first_candidate_text() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "Grab the sale now!" }, { "text": "ignored" }], "role": "model" } },
                { "content": { "parts": [{ "text": "second" }] } }
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.into_first_text().as_deref(),
            Some("Grab the sale now!")
        );
    }

    #[test]
    fn test_missing_candidates_yield_none() {
        let blocked = r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#;
        let response: GenerateContentResponse = serde_json::from_str(blocked).unwrap();
        assert_eq!(response.into_first_text(), None);

        let empty_parts = r#"{ "candidates": [{ "finishReason": "SAFETY" }] }"#;
        let response: GenerateContentResponse = serde_json::from_str(empty_parts).unwrap();
        assert_eq!(response.into_first_text(), None);
    }

    #[test]
    fn test_decode_error_envelope() {
        let body = r#"{ "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" } }"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.message, "API key not valid.");
    }
}
