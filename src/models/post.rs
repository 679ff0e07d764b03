use crate::entities::{hero, post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub id: i64,
    pub author_id: i64,
    pub author_codename: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<(post::Model, hero::Model)> for PostResponse {
    fn from((post, author): (post::Model, hero::Model)) -> Self {
        PostResponse {
            id: post.id,
            author_id: post.author_id,
            author_codename: author.codename,
            message: post.message,
            created_at: post.created_at,
        }
    }
}
