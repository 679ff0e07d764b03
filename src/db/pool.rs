use crate::config::Config;
use crate::db::ensure_schema;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &Config) -> Result<DbPool, anyhow::Error> {
    let mut options = ConnectOptions::new(config.database_url());
    if let Some(max) = config.database.max_connections {
        options.max_connections(max);
    }
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    ensure_schema(&db).await?;

    Ok(db)
}
