use crate::error::GenerationError;
use crate::ports::ModelInfo;

/// Models tried in order before falling back to whatever is available.
pub const DEFAULT_PREFERRED_MODELS: [&str; 4] = [
    "gemini-1.5-flash",
    "gemini-2.0-flash",
    "gemini-1.5-pro",
    "gemini-pro",
];

/// Pick the model to generate with.
///
/// The first preference that the provider offers as a text model wins.
/// Otherwise the first text-capable model is used.
pub fn select_model(
    models: &[ModelInfo],
    preferences: &[String],
) -> Result<String, GenerationError> {
    let usable: Vec<&str> = models
        .iter()
        .filter(|m| m.is_text_capable())
        .map(ModelInfo::short_name)
        .collect();

    if let Some(preferred) = preferences
        .iter()
        .find(|p| usable.contains(&p.as_str()))
    {
        tracing::info!(model = %preferred, "Using preferred model");
        return Ok(preferred.clone());
    }

    let fallback = usable.first().ok_or(GenerationError::NoSuitableModel)?;
    tracing::info!(model = %fallback, "Using first available text model");
    Ok(fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preferences() -> Vec<String> {
        DEFAULT_PREFERRED_MODELS.iter().map(|s| s.to_string()).collect()
    }

    fn text_model(name: &str) -> ModelInfo {
        ModelInfo::new(name, &["generateContent", "countTokens"])
    }

    #[test]
    fn test_prefers_first_listed_preference() {
        let models = vec![
            text_model("models/gemini-pro"),
            text_model("models/gemini-1.5-pro"),
            text_model("models/gemini-1.5-flash"),
        ];

        let selected = select_model(&models, &preferences()).unwrap();
        assert_eq!(selected, "gemini-1.5-flash");
    }

    #[test]
    fn test_falls_back_to_first_text_model() {
        let models = vec![
            ModelInfo::new("models/embedding-001", &["embedContent"]),
            text_model("models/gemini-experimental"),
            text_model("models/gemini-other"),
        ];

        let selected = select_model(&models, &preferences()).unwrap();
        assert_eq!(selected, "gemini-experimental");
    }

    #[test]
    fn test_skips_vision_and_non_text_models() {
        let models = vec![
            text_model("models/gemini-1.5-flash-vision"),
            ModelInfo::new("models/gemini-1.5-flash", &["embedContent"]),
            text_model("models/gemini-pro"),
        ];

        let selected = select_model(&models, &preferences()).unwrap();
        assert_eq!(selected, "gemini-pro");
    }

    #[test]
    fn test_no_models_is_an_error() {
        let err = select_model(&[], &preferences()).unwrap_err();
        assert!(matches!(err, GenerationError::NoSuitableModel));

        let only_vision = vec![text_model("models/gemini-pro-vision")];
        let err = select_model(&only_vision, &preferences()).unwrap_err();
        assert!(matches!(err, GenerationError::NoSuitableModel));
    }
}
