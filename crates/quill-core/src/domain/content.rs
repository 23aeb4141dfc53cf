use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The caller-supplied description of a piece of content to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBrief {
    pub title: String,
    pub keywords: String,
    pub content_type: String,
    pub tone: String,
    pub audience: String,
    pub length: String,
}

impl ContentBrief {
    /// Reject briefs with blank fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("title", &self.title),
            ("keywords", &self.keywords),
            ("content_type", &self.content_type),
            ("tone", &self.tone),
            ("audience", &self.audience),
            ("length", &self.length),
        ];

        let blank: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if blank.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "fields must not be empty: {}",
                blank.join(", ")
            )))
        }
    }
}

/// A fully generated record that has not been stored yet.
///
/// There is no way to build one without the generated text, so storage never
/// sees a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContent {
    pub brief: ContentBrief,
    pub generated_text: String,
    pub created_at: DateTime<Utc>,
}

impl NewContent {
    /// Pair a brief with its generated text, stamped with the current time.
    pub fn new(brief: ContentBrief, generated_text: String) -> Self {
        Self {
            brief,
            generated_text,
            created_at: Utc::now(),
        }
    }
}

/// Content entity - a stored generation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub id: i64,
    pub brief: ContentBrief,
    pub generated_text: String,
    pub created_at: DateTime<Utc>,
}

impl Content {
    /// Attach a storage-assigned id to a new record.
    pub fn stored(id: i64, new: NewContent) -> Self {
        Self {
            id,
            brief: new.brief,
            generated_text: new.generated_text,
            created_at: new.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> ContentBrief {
        ContentBrief {
            title: "Launch".to_string(),
            keywords: "sale,discount".to_string(),
            content_type: "social_media_post".to_string(),
            tone: "casual".to_string(),
            audience: "teenager".to_string(),
            length: "short".to_string(),
        }
    }

    #[test]
    fn test_complete_brief_is_valid() {
        assert!(brief().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_reported() {
        let mut b = brief();
        b.title = "   ".to_string();
        b.tone = String::new();

        let err = b.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: fields must not be empty: title, tone"
        );
    }

    #[test]
    fn test_stored_keeps_creation_time() {
        let new = NewContent::new(brief(), "Grab the sale now!".to_string());
        let created_at = new.created_at;

        let content = Content::stored(7, new);
        assert_eq!(content.id, 7);
        assert_eq!(content.created_at, created_at);
        assert_eq!(content.generated_text, "Grab the sale now!");
    }
}
