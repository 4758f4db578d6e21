#![cfg(test)]
use tokio::sync::{Mutex, OnceCell};
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use models::pricing::NewPricing;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Serializes DB tests in this crate; `replace_all` wipes the whole table.
pub static DB_LOCK: Mutex<()> = Mutex::const_new(());

fn config() -> DatabaseConfig {
    DatabaseConfig::load().unwrap_or_else(|_| DatabaseConfig::from_env())
}

/// A migrated connection, or `None` when DB tests are disabled or unreachable.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return None; }

    // Run migrations exactly once, with a throwaway connection
    let migrated = *MIGRATED
        .get_or_init(|| async {
            let mut cfg = config();
            cfg.min_connections = cfg.min_connections.min(1);
            let db = match connect_with_config(&cfg).await {
                Ok(db) => db,
                Err(e) => { eprintln!("skip: cannot connect to db: {}", e); return false; }
            };
            migration::Migrator::up(&db, None).await.is_ok()
        })
        .await;
    if !migrated { return None; }

    // Return a fresh connection for the current test's runtime
    let mut cfg = config();
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.acquire_timeout = std::time::Duration::from_secs(10);
    connect_with_config(&cfg).await.ok()
}

pub fn sample(meal_plan: &str, people_count: i32, price: f64) -> NewPricing {
    NewPricing {
        meal_plan: meal_plan.to_string(),
        price,
        food_type: "Veg".into(),
        people_count,
        frequency: "Daily".into(),
        meal_details: "Lunch".into(),
        utensil_washing_price: None,
        utensil_washing_commission: None,
        children_special_price: None,
        preference_community_percentage: None,
        kitchen_platform_price: None,
    }
}
