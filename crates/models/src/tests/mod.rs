


use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use tokio::sync::OnceCell;

use crate::pricing::NewPricing;

// Migrations run once per test process; concurrent `up` calls race on the
// migration bookkeeping table.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connect and migrate, or `None` when tests should be skipped.
pub(crate) async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let migrated = *MIGRATED
        .get_or_init(|| async {
            match crate::db::connect().await {
                Ok(db) => match migration::Migrator::up(&db, None).await {
                    Ok(()) => true,
                    Err(e) => {
                        eprintln!("skip: migrate up failed: {}", e);
                        false
                    }
                },
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return None;
    }
    crate::db::connect().await.ok()
}

pub(crate) fn sample(meal_plan: &str) -> NewPricing {
    NewPricing {
        meal_plan: meal_plan.to_string(),
        price: 499.99,
        food_type: "Veg".into(),
        people_count: 2,
        frequency: "Daily".into(),
        meal_details: "Breakfast and Dinner".into(),
        utensil_washing_price: Some(99.99),
        utensil_washing_commission: Some(10.0),
        children_special_price: None,
        preference_community_percentage: None,
        kitchen_platform_price: None,
    }
}
