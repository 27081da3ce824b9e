use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use migration::{Migrator, MigratorTrait};
use models::db::{connect_with_config, DatabaseConfig};
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Public entry: connect, migrate, build the app and run the HTTP server.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let format = cfg.logging.format.parse::<LogFormat>().map_err(StartupError::InvalidConfig)?;
    init_logging(format);

    let addr = bind_addr(&cfg)?;

    let db = connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    Migrator::up(&db, None).await?;
    info!("migrations applied");

    let app: Router = routes::build_router(AppState::new(db));

    info!(%addr, "starting survey api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparsable_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn default_config_binds_loopback() {
        let addr = bind_addr(&AppConfig::default()).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }
}
