use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Full connection URL. When set, the MySQL parts below are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
                host: env::var("MYSQL_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: env::var("MYSQL_PORT")
                    .unwrap_or_else(|_| "3306".to_string())
                    .parse()
                    .unwrap_or(3306),
                user: env::var("MYSQL_USER").unwrap_or_else(|_| "root".to_string()),
                password: env::var("MYSQL_PASSWORD").unwrap_or_else(|_| "password".to_string()),
                database: env::var("MYSQL_DATABASE").unwrap_or_else(|_| "hero_board".to_string()),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|value| value.parse().ok()),
            },
        })
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database.url {
            return url.clone();
        }
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.database.user,
            self.database.password,
            self.database.host,
            self.database.port,
            self.database.database
        )
    }
}
