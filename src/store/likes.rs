use crate::db::DbPool;
use crate::entities::{hero, like, post};
use crate::store::{StoreError, StoreResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// Records that `hero_id` liked `post_id`.
///
/// Fails with [`StoreError::ReferenceError`] when either side is missing and
/// with [`StoreError::ConstraintViolation`] when the pair already exists.
pub async fn create_like(db: &DbPool, hero_id: i64, post_id: i64) -> StoreResult<like::Model> {
    let txn = db.begin().await?;

    let hero = hero::Entity::find_by_id(hero_id)
        .one(&txn)
        .await?
        .ok_or_else(|| StoreError::ReferenceError(format!("hero {} does not exist", hero_id)))?;

    let post_exists = post::Entity::find_by_id(post_id).one(&txn).await?.is_some();
    if !post_exists {
        return Err(StoreError::ReferenceError(format!(
            "post {} does not exist",
            post_id
        )));
    }

    let existing = like::Entity::find()
        .filter(
            Condition::all()
                .add(like::Column::HeroId.eq(hero_id))
                .add(like::Column::PostId.eq(post_id)),
        )
        .one(&txn)
        .await?;

    if existing.is_some() {
        return Err(StoreError::ConstraintViolation(format!(
            "hero {} already liked post {}",
            hero_id, post_id
        )));
    }

    let like = like::ActiveModel {
        hero_id: Set(hero_id),
        post_id: Set(post_id),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    log::info!("Like created: {}", like.summary(&hero));
    Ok(like)
}

/// All likes in the order they were created.
pub async fn list_likes(db: &DbPool) -> StoreResult<Vec<like::Model>> {
    let likes = like::Entity::find()
        .order_by_asc(like::Column::Id)
        .all(db)
        .await?;
    Ok(likes)
}
