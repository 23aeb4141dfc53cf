//! Content entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use quill_core::domain::{Content, ContentBrief, NewContent};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub keywords: String,
    pub content_type: String,
    pub tone: String,
    pub audience: String,
    pub length: String,
    #[sea_orm(column_type = "Text")]
    pub generated_text: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Content.
impl From<Model> for Content {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            brief: ContentBrief {
                title: model.title,
                keywords: model.keywords,
                content_type: model.content_type,
                tone: model.tone,
                audience: model.audience,
                length: model.length,
            },
            generated_text: model.generated_text,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from an unsaved Domain record to an insertable ActiveModel.
/// The id is left for the database to assign.
impl From<NewContent> for ActiveModel {
    fn from(content: NewContent) -> Self {
        let brief = content.brief;
        Self {
            id: NotSet,
            title: Set(brief.title),
            keywords: Set(brief.keywords),
            content_type: Set(brief.content_type),
            tone: Set(brief.tone),
            audience: Set(brief.audience),
            length: Set(brief.length),
            generated_text: Set(content.generated_text),
            created_at: Set(content.created_at.into()),
        }
    }
}
