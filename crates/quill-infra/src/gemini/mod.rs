//! Gemini text provider over the Generative Language REST API.

mod client;
mod types;

pub use client::{DEFAULT_BASE_URL, GeminiClient, GeminiConfig};
