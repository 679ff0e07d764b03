use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Duplicate hero codename or duplicate (hero, post) like.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A referenced hero or post does not exist.
    #[error("Reference error: {0}")]
    ReferenceError(String),

    #[error("Field `{field}` is longer than {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        // A racing writer can slip past the in-transaction checks; the
        // database constraints still report it.
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::ConstraintViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => StoreError::ReferenceError(msg),
            _ => {
                log::error!("Database error: {:?}", err);
                StoreError::Database(err)
            }
        }
    }
}

pub(crate) fn check_len(field: &'static str, value: &str, max: usize) -> StoreResult<()> {
    if value.chars().count() > max {
        return Err(StoreError::FieldTooLong { field, max });
    }
    Ok(())
}
