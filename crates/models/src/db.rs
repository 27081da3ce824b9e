use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::{info, warn};

const RETRY_BASE: Duration = Duration::from_millis(200);
const RETRY_CAP: Duration = Duration::from_secs(5);

/// Pool and transport settings for the relational store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub statement_timeout: Duration,
    pub connect_retries: u32,
    pub sqlx_logging: bool,
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            statement_timeout: Duration::from_secs(c.statement_timeout_secs),
            connect_retries: c.connect_retries,
            sqlx_logging: c.sqlx_logging,
        }
    }
}

impl DatabaseConfig {
    /// Private SQLite database living as long as the returned pool.
    /// A single pinned connection keeps the in-memory schema alive.
    pub fn in_memory() -> Self {
        let mut cfg = Self::from(&configs::DatabaseConfig::default());
        cfg.url = "sqlite::memory:".to_string();
        cfg.max_connections = 1;
        cfg.min_connections = 1;
        cfg.connect_retries = 0;
        cfg
    }

    fn is_postgres(&self) -> bool {
        let lower = self.url.to_ascii_lowercase();
        lower.starts_with("postgres://") || lower.starts_with("postgresql://")
    }

    /// URL handed to the driver. Postgres gets the statement timeout as a
    /// startup option unless the URL already carries `options`.
    pub fn effective_url(&self) -> String {
        if !self.is_postgres() || self.url.contains("options=") {
            return self.url.clone();
        }
        let sep = if self.url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}options=-c%20statement_timeout%3D{}",
            self.url,
            sep,
            self.statement_timeout.as_millis()
        )
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.effective_url());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .sqlx_logging(self.sqlx_logging);
        opt
    }
}

/// Delay before retry number `attempt` (1-based): doubling from 200ms, capped at 5s.
pub fn retry_delay(attempt: u32) -> Duration {
    let factor = 1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
    RETRY_BASE.saturating_mul(factor).min(RETRY_CAP)
}

/// Open a pool, retrying transient connect failures `connect_retries` times.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut attempt = 0u32;
    loop {
        match Database::connect(cfg.connect_options()).await {
            Ok(db) => {
                info!(max_connections = cfg.max_connections, attempt, "database connected");
                return Ok(db);
            }
            Err(e) if attempt < cfg.connect_retries => {
                attempt += 1;
                let delay = retry_delay(attempt);
                warn!(error = %e, attempt, delay_ms = delay.as_millis() as u64, "database connect failed; retrying");
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pg(url: &str) -> DatabaseConfig {
        let mut cfg = DatabaseConfig::from(&configs::DatabaseConfig::default());
        cfg.url = url.to_string();
        cfg
    }

    #[test]
    fn postgres_url_gets_statement_timeout() {
        let cfg = pg("postgres://u:p@localhost:5432/survey");
        assert_eq!(
            cfg.effective_url(),
            "postgres://u:p@localhost:5432/survey?options=-c%20statement_timeout%3D60000"
        );
    }

    #[test]
    fn existing_query_string_is_extended() {
        let cfg = pg("postgresql://localhost/survey?sslmode=disable");
        assert!(cfg.effective_url().ends_with("?sslmode=disable&options=-c%20statement_timeout%3D60000"));
    }

    #[test]
    fn explicit_options_are_left_alone() {
        let cfg = pg("postgres://localhost/survey?options=-c%20search_path%3Dsurvey");
        assert_eq!(cfg.effective_url(), cfg.url);
    }

    #[test]
    fn sqlite_url_is_untouched() {
        let cfg = DatabaseConfig::in_memory();
        assert_eq!(cfg.effective_url(), "sqlite::memory:");
        assert_eq!(cfg.max_connections, 1);
    }

    #[test]
    fn retry_delay_doubles_and_caps() {
        assert_eq!(retry_delay(1), Duration::from_millis(200));
        assert_eq!(retry_delay(2), Duration::from_millis(400));
        assert_eq!(retry_delay(3), Duration::from_millis(800));
        assert_eq!(retry_delay(10), Duration::from_secs(5));
        assert_eq!(retry_delay(64), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn in_memory_connects_without_retry() {
        let db = connect_with_config(&DatabaseConfig::in_memory()).await;
        assert!(db.is_ok());
    }
}
