use crate::db::DbPool;
use crate::entities::{hero, like, post};
use crate::store::{StoreError, StoreResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// Inserts a post by `author_id`. Fails with [`StoreError::ReferenceError`]
/// when the author does not exist.
pub async fn create_post(
    db: &DbPool,
    author_id: i64,
    message: impl Into<String>,
) -> StoreResult<post::Model> {
    let txn = db.begin().await?;

    let author = hero::Entity::find_by_id(author_id)
        .one(&txn)
        .await?
        .ok_or_else(|| {
            StoreError::ReferenceError(format!("author hero {} does not exist", author_id))
        })?;

    let post = post::ActiveModel {
        author_id: Set(author.id),
        message: Set(message.into()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    log::info!("Post created: {} (id {})", post.summary(&author), post.id);
    Ok(post)
}

/// Deletes a post and every like on it. The author is untouched.
pub async fn delete_post(db: &DbPool, post_id: i64) -> StoreResult<()> {
    let txn = db.begin().await?;

    let exists = post::Entity::find_by_id(post_id).one(&txn).await?.is_some();
    if !exists {
        return Err(StoreError::ReferenceError(format!(
            "post {} does not exist",
            post_id
        )));
    }

    let likes = like::Entity::delete_many()
        .filter(like::Column::PostId.eq(post_id))
        .exec(&txn)
        .await?;

    post::Entity::delete_by_id(post_id).exec(&txn).await?;

    txn.commit().await?;

    log::info!(
        "Post {} deleted, cascaded {} likes",
        post_id,
        likes.rows_affected
    );
    Ok(())
}

/// All posts in the order they were created.
pub async fn list_posts(db: &DbPool) -> StoreResult<Vec<post::Model>> {
    let posts = post::Entity::find()
        .order_by_asc(post::Column::Id)
        .all(db)
        .await?;
    Ok(posts)
}

/// All posts in creation order, each paired with its author.
pub async fn list_posts_with_authors(db: &DbPool) -> StoreResult<Vec<(post::Model, hero::Model)>> {
    let rows = post::Entity::find()
        .find_also_related(hero::Entity)
        .order_by_asc(post::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(post, author)| match author {
            Some(author) => Some((post, author)),
            None => {
                log::warn!("Post {} has no author row, skipping", post.id);
                None
            }
        })
        .collect())
}
