//! Drop every table and recreate the schema from migrations.

use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::{error, info};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let db = match configs::AppConfig::load_or_env() {
        Ok(cfg) => models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await,
        Err(e) => Err(e),
    };
    let db = match db {
        Ok(db) => db,
        Err(e) => {
            error!(service = "init-db", error = %e, "cannot connect to database");
            return std::process::ExitCode::FAILURE;
        }
    };

    match migration::Migrator::fresh(&db).await {
        Ok(()) => {
            info!(service = "init-db", "existing tables dropped and schema recreated");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "init-db", error = %e, "error managing database tables");
            std::process::ExitCode::FAILURE
        }
    }
}
