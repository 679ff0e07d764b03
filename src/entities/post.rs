use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of message characters shown in a post summary.
pub const PREVIEW_CHARS: usize = 30;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub author_id: i64,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hero::Entity",
        from = "Column::AuthorId",
        to = "super::hero::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(has_many = "super::like::Entity")]
    Likes,
}

impl Related<super::hero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// `"<codename>: <first 30 chars>..."`, the way a post is listed next to its author.
    pub fn summary(&self, author: &super::hero::Model) -> String {
        let preview: String = self.message.chars().take(PREVIEW_CHARS).collect();
        format!("{}: {}...", author.codename, preview)
    }
}
