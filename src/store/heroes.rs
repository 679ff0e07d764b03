use crate::db::DbPool;
use crate::entities::hero::{
    self, CITY_MAX_LEN, CODENAME_MAX_LEN, PRIMARY_POWER_MAX_LEN, REAL_NAME_MAX_LEN,
};
use crate::entities::{like, post};
use crate::models::NewHero;
use crate::store::{check_len, StoreError, StoreResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};

fn validate(new_hero: &NewHero) -> StoreResult<()> {
    check_len("codename", &new_hero.codename, CODENAME_MAX_LEN)?;
    if let Some(real_name) = &new_hero.real_name {
        check_len("real_name", real_name, REAL_NAME_MAX_LEN)?;
    }
    check_len("primary_power", &new_hero.primary_power, PRIMARY_POWER_MAX_LEN)?;
    check_len("city", &new_hero.city, CITY_MAX_LEN)?;
    Ok(())
}

/// Inserts a hero. Fails with [`StoreError::ConstraintViolation`] when the
/// codename is already taken.
pub async fn create_hero(db: &DbPool, new_hero: NewHero) -> StoreResult<hero::Model> {
    validate(&new_hero)?;

    let txn = db.begin().await?;

    let existing = hero::Entity::find()
        .filter(hero::Column::Codename.eq(&new_hero.codename))
        .one(&txn)
        .await?;

    if existing.is_some() {
        return Err(StoreError::ConstraintViolation(format!(
            "hero with codename `{}` already exists",
            new_hero.codename
        )));
    }

    let hero = hero::ActiveModel {
        codename: Set(new_hero.codename),
        real_name: Set(new_hero.real_name),
        primary_power: Set(new_hero.primary_power),
        city: Set(new_hero.city),
        backstory: Set(new_hero.backstory),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    log::info!("Hero created: {} (id {})", hero, hero.id);
    Ok(hero)
}

/// Deletes a hero together with its posts, the likes on those posts, and the
/// likes the hero gave.
pub async fn delete_hero(db: &DbPool, hero_id: i64) -> StoreResult<()> {
    let txn = db.begin().await?;

    let hero = hero::Entity::find_by_id(hero_id)
        .one(&txn)
        .await?
        .ok_or_else(|| StoreError::ReferenceError(format!("hero {} does not exist", hero_id)))?;

    let post_ids: Vec<i64> = post::Entity::find()
        .select_only()
        .column(post::Column::Id)
        .filter(post::Column::AuthorId.eq(hero_id))
        .into_tuple()
        .all(&txn)
        .await?;

    let likes = like::Entity::delete_many()
        .filter(
            Condition::any()
                .add(like::Column::HeroId.eq(hero_id))
                .add(like::Column::PostId.is_in(post_ids)),
        )
        .exec(&txn)
        .await?;

    let posts = post::Entity::delete_many()
        .filter(post::Column::AuthorId.eq(hero_id))
        .exec(&txn)
        .await?;

    hero::Entity::delete_by_id(hero_id).exec(&txn).await?;

    txn.commit().await?;

    log::info!(
        "Hero deleted: {} (id {}), cascaded {} posts and {} likes",
        hero,
        hero_id,
        posts.rows_affected,
        likes.rows_affected
    );
    Ok(())
}

/// All heroes in the order they were created.
pub async fn list_heroes(db: &DbPool) -> StoreResult<Vec<hero::Model>> {
    let heroes = hero::Entity::find()
        .order_by_asc(hero::Column::Id)
        .all(db)
        .await?;
    Ok(heroes)
}
