use crate::entities::{hero, like, post};
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DbErr, EntityName, Schema};

pub const LIKES_HERO_POST_UNIQUE: &str = "uq_likes_hero_post";

/// Creates `heroes`, `posts` and `likes` if they are missing.
///
/// Tables come from the entity definitions, so the `ON DELETE CASCADE` foreign
/// keys and the `heroes.codename` unique column follow the relations declared
/// there. The `(hero_id, post_id)` pair gets its own unique constraint.
pub async fn ensure_schema<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut heroes = schema.create_table_from_entity(hero::Entity);
    heroes.if_not_exists();

    let mut posts = schema.create_table_from_entity(post::Entity);
    posts.if_not_exists();

    let mut likes = schema.create_table_from_entity(like::Entity);
    likes.if_not_exists().index(
        Index::create()
            .name(LIKES_HERO_POST_UNIQUE)
            .col(like::Column::HeroId)
            .col(like::Column::PostId)
            .unique(),
    );

    for stmt in [heroes, posts, likes] {
        db.execute(backend.build(&stmt)).await?;
    }

    log::info!(
        "Schema ready: {}, {}, {}",
        hero::Entity.table_name(),
        post::Entity.table_name(),
        like::Entity.table_name()
    );

    Ok(())
}
