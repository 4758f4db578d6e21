use std::{env, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// The config file, if there is one. A file that exists but fails to parse
/// or validate stops startup instead of falling back to the environment.
pub fn load_config() -> Result<Option<AppConfig>, StartupError> {
    load_config_from(&configs::config_path())
}

fn load_config_from(path: &str) -> Result<Option<AppConfig>, StartupError> {
    let invalid = |e: anyhow::Error| StartupError::InvalidConfig(format!("{e:#}"));
    let Some(mut cfg) = configs::load_optional(path).map_err(invalid)? else {
        return Ok(None);
    };
    cfg.normalize_and_validate().map_err(invalid)?;
    Ok(Some(cfg))
}

/// Runtime worker count: `[server].worker_threads`, else `TOKIO_WORKER_THREADS`.
pub fn worker_threads(cfg: Option<&AppConfig>) -> Option<usize> {
    match cfg {
        Some(cfg) => cfg.server.worker_threads,
        None => env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0),
    }
}

/// Host/port from the config file, else `SERVER_HOST` / `SERVER_PORT`.
fn load_bind_addr(cfg: Option<&AppConfig>) -> anyhow::Result<SocketAddr> {
    let (host, port) = match cfg {
        Some(cfg) => (cfg.server.host.clone(), cfg.server.port),
        None => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Connect, migrate, then serve the pricing API until the listener fails.
pub async fn run(cfg: Option<AppConfig>) -> anyhow::Result<()> {
    let db = match &cfg {
        Some(cfg) => models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await,
        None => models::db::connect().await,
    }
    .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    let app: Router = routes::build_router(ServerState::new(db), build_cors());

    let addr = load_bind_addr(cfg.as_ref())?;
    info!(%addr, "starting pricing server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 9100;
        let addr = load_bind_addr(Some(&cfg)).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:9100");
    }

    #[test]
    fn worker_threads_follow_config() {
        let mut cfg = AppConfig::default();
        cfg.server.worker_threads = Some(2);
        assert_eq!(worker_threads(Some(&cfg)), Some(2));
    }

    #[test]
    fn malformed_config_stops_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = \"eighty\"\n").unwrap();
        let err = load_config_from(&path.to_string_lossy()).unwrap_err();
        assert!(matches!(err, StartupError::InvalidConfig(_)));
    }

    #[test]
    fn invalid_database_section_stops_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[database]\nurl = \"mysql://localhost/meals\"\n").unwrap();
        assert!(matches!(load_config_from(&path.to_string_lossy()), Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load_config_from(&path.to_string_lossy()).unwrap().is_none());
    }
}
