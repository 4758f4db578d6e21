use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::pricing::{Model, NewPricing, PricingPatch};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

#[async_trait]
pub trait PricingRepository: Send + Sync {
    async fn list(&self, opts: Pagination) -> Result<Vec<Model>, ServiceError>;
    async fn create(&self, input: NewPricing) -> Result<Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    async fn update(&self, id: i32, patch: PricingPatch) -> Result<Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPricingRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPricingRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl PricingRepository for SeaOrmPricingRepository {
    async fn list(&self, opts: Pagination) -> Result<Vec<Model>, ServiceError> {
        crate::db::pricing_service::list_pricing(&self.db, opts).await
    }

    async fn create(&self, input: NewPricing) -> Result<Model, ServiceError> {
        crate::db::pricing_service::create_pricing(&self.db, input).await
    }

    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        crate::db::pricing_service::get_pricing(&self.db, id).await
    }

    async fn update(&self, id: i32, patch: PricingPatch) -> Result<Model, ServiceError> {
        crate::db::pricing_service::update_pricing(&self.db, id, patch).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::pricing_service::delete_pricing(&self.db, id).await
    }
}
