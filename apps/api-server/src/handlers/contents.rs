//! Content generation handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Content, ContentBrief, NewContent};
use quill_shared::dto::{ContentResponse, CreateContentRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_brief(req: CreateContentRequest) -> ContentBrief {
    ContentBrief {
        title: req.title,
        keywords: req.keywords,
        content_type: req.content_type,
        tone: req.tone,
        audience: req.audience,
        length: req.length,
    }
}

fn to_response(content: Content) -> ContentResponse {
    let brief = content.brief;
    ContentResponse {
        id: content.id,
        title: brief.title,
        keywords: brief.keywords,
        content_type: brief.content_type,
        tone: brief.tone,
        audience: brief.audience,
        length: brief.length,
        generated_text: content.generated_text,
        created_at: content.created_at.to_rfc3339(),
    }
}

/// POST /api/contents/
///
/// Generates text for the brief, then stores the complete record. Nothing is
/// written when generation fails.
pub async fn create_content(
    state: web::Data<AppState>,
    body: web::Json<CreateContentRequest>,
) -> AppResult<HttpResponse> {
    let brief = to_brief(body.into_inner());
    brief.validate()?;

    tracing::info!(
        content_type = %brief.content_type,
        tone = %brief.tone,
        audience = %brief.audience,
        length = %brief.length,
        "Generating content"
    );

    let generated_text = state.generator.generate(&brief).await?;
    if generated_text.trim().is_empty() {
        tracing::warn!("Provider returned empty text");
    }

    let stored = state
        .contents
        .create(NewContent::new(brief, generated_text))
        .await?;
    tracing::info!(content_id = stored.id, "Content created");

    Ok(HttpResponse::Ok().json(to_response(stored)))
}

/// GET /api/contents/
pub async fn list_contents(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let contents = state.contents.list_all().await?;

    let body: Vec<ContentResponse> = contents.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}
