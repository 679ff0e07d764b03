use crate::db::DbPool;
use crate::models::HeroResponse;
use crate::store;
use actix_web::{web, HttpResponse, Result as ActixResult};

#[utoipa::path(
    get,
    path = "/api/heroes",
    responses(
        (status = 200, description = "All heroes in creation order", body = Vec<HeroResponse>),
        (status = 500, description = "Storage failure")
    ),
    tag = "heroes"
)]
pub async fn list_heroes(pool: web::Data<DbPool>) -> ActixResult<HttpResponse> {
    let heroes = store::list_heroes(pool.get_ref())
        .await
        .map_err(|e| {
            log::error!("Failed to list heroes: {:?}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let heroes: Vec<HeroResponse> = heroes.into_iter().map(HeroResponse::from).collect();

    Ok(HttpResponse::Ok().json(heroes))
}
