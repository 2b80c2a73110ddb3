use crate::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS menu_item (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(80) NOT NULL,
    rating INTEGER,
    is_vegan BOOLEAN,
    calories INTEGER,
    description VARCHAR(200)
)"#;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct DbPool {
    pool: SqlitePool,
}

impl DbPool {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);

        let pool_options =
            SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(config.pool_timeout_seconds));

        // An in-memory database lives only as long as its connection.
        let (pool_options, options) = if is_in_memory(&config.url) {
            (
                pool_options
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None),
                options,
            )
        } else {
            (
                pool_options.max_connections(config.pool_max_size),
                options.journal_mode(SqliteJournalMode::Wal),
            )
        };

        let pool = pool_options.connect_with(options).await?;

        // Test connection
        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Creates the `menu_item` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        debug!("menu_item schema ready");
        Ok(())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:menu?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://data.sqlite"));
    }
}
