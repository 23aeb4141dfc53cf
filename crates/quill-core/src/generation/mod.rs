//! Provider-agnostic content generation: model selection, prompt
//! construction and the client that ties them to a [`TextProvider`].
//!
//! [`TextProvider`]: crate::ports::TextProvider

mod client;
mod prompt;
mod selection;

pub use client::{GenerationClient, GenerationSettings};
pub use prompt::build_prompt;
pub use selection::{DEFAULT_PREFERRED_MODELS, select_model};
