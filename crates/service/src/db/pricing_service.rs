use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{error, info, warn};
use models::pricing::{self, NewPricing, PricingPatch};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Row counts from a delete-then-insert refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub deleted: u64,
    pub inserted: u64,
}

/// Create a pricing row.
pub async fn create_pricing(db: &DatabaseConnection, input: NewPricing) -> Result<pricing::Model, ServiceError> {
    Ok(pricing::create(db, input).await?)
}

/// List pricing rows with offset/limit pagination.
pub async fn list_pricing(db: &DatabaseConnection, opts: Pagination) -> Result<Vec<pricing::Model>, ServiceError> {
    let (offset, limit) = opts.normalize();
    Ok(pricing::list(db, offset, limit).await?)
}

/// Get pricing row by id.
pub async fn get_pricing(db: &DatabaseConnection, id: i32) -> Result<Option<pricing::Model>, ServiceError> {
    Ok(pricing::find(db, id).await?)
}

/// Partially update a pricing row; absent fields keep their stored value.
pub async fn update_pricing(db: &DatabaseConnection, id: i32, patch: PricingPatch) -> Result<pricing::Model, ServiceError> {
    pricing::update(db, id, patch).await.map_err(|e| match e {
        models::errors::ModelError::NotFound(_) => ServiceError::not_found("pricing"),
        other => other.into(),
    })
}

/// Delete pricing row; `false` when no row had that id.
pub async fn delete_pricing(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    Ok(pricing::delete(db, id).await?)
}

/// Clear the table and insert `rows` in one transaction.
///
/// On any failure the transaction is rolled back and the previous contents
/// stay in place.
pub async fn replace_all(db: &DatabaseConnection, rows: Vec<NewPricing>) -> Result<RefreshOutcome, ServiceError> {
    let txn = db.begin().await?;
    let result = async {
        let deleted = pricing::delete_all(&txn).await?;
        let inserted = pricing::insert_many(&txn, rows).await?;
        Ok::<_, ServiceError>(RefreshOutcome { deleted, inserted })
    }
    .await;

    match result {
        Ok(outcome) => {
            txn.commit().await?;
            info!(deleted = outcome.deleted, inserted = outcome.inserted, "pricing table refreshed");
            Ok(outcome)
        }
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                warn!(error = %rb, "rollback after failed refresh also failed");
            }
            error!(error = %e, "pricing refresh failed; rolled back");
            Err(e)
        }
    }
}
