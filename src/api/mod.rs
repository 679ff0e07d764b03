pub mod heroes;
pub mod posts;

use crate::models::{HeroResponse, PostResponse};
use actix_web::web;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        heroes::list_heroes,
        posts::list_posts,
    ),
    components(schemas(
        HeroResponse,
        PostResponse,
    )),
    tags(
        (name = "heroes", description = "Hero listing"),
        (name = "posts", description = "Post listing"),
    ),
)]
pub struct ApiDoc;

/// Registers the read-only list views under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/heroes", web::get().to(heroes::list_heroes))
            .route("/posts", web::get().to(posts::list_posts)),
    );
}
