//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to generate and store a piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContentRequest {
    pub title: String,
    pub keywords: String,
    pub content_type: String,
    pub tone: String,
    pub audience: String,
    pub length: String,
}

/// A stored content record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentResponse {
    pub id: i64,
    pub title: String,
    pub keywords: String,
    pub content_type: String,
    pub tone: String,
    pub audience: String,
    pub length: String,
    pub generated_text: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

/// Fixed greeting payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
