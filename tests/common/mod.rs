use hero_board::config::{Config, DatabaseConfig, ServerConfig};
use hero_board::db::{self, DbPool};

/// Config pointing at a private in-memory SQLite database.
///
/// One connection only: every SQLite `:memory:` connection is its own database.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: Some("sqlite::memory:".to_string()),
            host: "localhost".to_string(),
            port: 0,
            user: String::new(),
            password: String::new(),
            database: String::new(),
            max_connections: Some(1),
        },
    }
}

pub async fn create_test_pool() -> DbPool {
    db::create_pool(&test_config())
        .await
        .expect("Failed to create test database")
}
