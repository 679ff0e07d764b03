use crate::db::DbPool;
use crate::models::PostResponse;
use crate::store;
use actix_web::{web, HttpResponse, Result as ActixResult};

#[utoipa::path(
    get,
    path = "/api/posts",
    responses(
        (status = 200, description = "All posts in creation order", body = Vec<PostResponse>),
        (status = 500, description = "Storage failure")
    ),
    tag = "posts"
)]
pub async fn list_posts(pool: web::Data<DbPool>) -> ActixResult<HttpResponse> {
    let posts = store::list_posts_with_authors(pool.get_ref())
        .await
        .map_err(|e| {
            log::error!("Failed to list posts: {:?}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let posts: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();

    Ok(HttpResponse::Ok().json(posts))
}
