use crate::domain::ContentBrief;

/// Format hint for the content types the service knows about.
fn format_hint(content_type: &str) -> Option<&'static str> {
    let normalized = content_type.trim().to_lowercase().replace([' ', '-'], "_");

    match normalized.as_str() {
        "article" => Some("Write it as flowing paragraphs."),
        "product_description" => Some("Focus on the product's features and benefits."),
        "social_media_post" => Some("Keep it short, punchy and attention-grabbing."),
        "email_promotion" => Some("Make it persuasive and end with a clear call to action."),
        _ => None,
    }
}

/// Build the instruction sent to the model for a brief.
pub fn build_prompt(brief: &ContentBrief) -> String {
    let hint = format_hint(&brief.content_type)
        .map(|h| format!("- {h}\n"))
        .unwrap_or_default();

    format!(
        "Write an engaging and relevant {content_type}.\n\
         \n\
         Content details:\n\
         - Title: {title}\n\
         - Main keywords: {keywords}\n\
         - Target audience: {audience}\n\
         - Tone: {tone}\n\
         - Length: {length}\n\
         \n\
         Additional instructions:\n\
         - Keep the content coherent, informative and easy to read.\n\
         - Match the language style to the target audience and the requested tone.\n\
         {hint}\
         - Do not include greetings or sign-offs; get straight to the point.\n\
         - Return only the body text of the content.\n",
        content_type = brief.content_type,
        title = brief.title,
        keywords = brief.keywords,
        audience = brief.audience,
        tone = brief.tone,
        length = brief.length,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(content_type: &str) -> ContentBrief {
        ContentBrief {
            title: "Launch".to_string(),
            keywords: "sale,discount".to_string(),
            content_type: content_type.to_string(),
            tone: "casual".to_string(),
            audience: "teenager".to_string(),
            length: "short".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_every_field() {
        let prompt = build_prompt(&brief("social_media_post"));

        for expected in [
            "social_media_post",
            "Title: Launch",
            "Main keywords: sale,discount",
            "Target audience: teenager",
            "Tone: casual",
            "Length: short",
        ] {
            assert!(prompt.contains(expected), "missing {expected:?}");
        }
        assert!(prompt.contains("Do not include greetings or sign-offs"));
        assert!(prompt.contains("Return only the body text"));
    }

    #[test]
    fn test_hint_matches_content_type() {
        let prompt = build_prompt(&brief("Email Promotion"));
        assert!(prompt.contains("call to action"));
        assert!(!prompt.contains("flowing paragraphs"));

        let prompt = build_prompt(&brief("product-description"));
        assert!(prompt.contains("features and benefits"));
    }

    #[test]
    fn test_unknown_type_gets_no_hint() {
        let prompt = build_prompt(&brief("haiku"));
        assert!(!prompt.contains("call to action"));
        assert!(!prompt.contains("flowing paragraphs"));
        assert!(!prompt.contains("features and benefits"));
        assert!(!prompt.contains("attention-grabbing"));
    }
}
