use std::sync::Arc;
use tracing::{info, instrument};

use models::pricing::{Model, NewPricing, PricingPatch};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::pricing::repository::PricingRepository;

/// Application service for the pricing resource.
pub struct PricingService<R: PricingRepository> {
    repo: Arc<R>,
}

impl<R: PricingRepository> PricingService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self, opts: Pagination) -> Result<Vec<Model>, ServiceError> {
        self.repo.list(opts).await
    }

    #[instrument(skip(self, input), fields(meal_plan = %input.meal_plan, people_count = input.people_count))]
    pub async fn create(&self, input: NewPricing) -> Result<Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "pricing created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> { self.repo.get(id).await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: PricingPatch) -> Result<Model, ServiceError> {
        self.repo.update(id, patch).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> { self.repo.delete(id).await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    /// In-memory stand-in for the database.
    #[derive(Default)]
    struct MemoryRepo {
        rows: Mutex<BTreeMap<i32, Model>>,
        next_id: Mutex<i32>,
    }

    #[async_trait]
    impl PricingRepository for MemoryRepo {
        async fn list(&self, opts: Pagination) -> Result<Vec<Model>, ServiceError> {
            let (skip, limit) = opts.normalize();
            let rows = self.rows.lock().await;
            Ok(rows.values().skip(skip as usize).take(limit as usize).cloned().collect())
        }

        async fn create(&self, input: NewPricing) -> Result<Model, ServiceError> {
            let mut next = self.next_id.lock().await;
            *next += 1;
            let model = fixture::from_new(*next, input);
            self.rows.lock().await.insert(model.id, model.clone());
            Ok(model)
        }

        async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
            Ok(self.rows.lock().await.get(&id).cloned())
        }

        async fn update(&self, id: i32, patch: PricingPatch) -> Result<Model, ServiceError> {
            let mut rows = self.rows.lock().await;
            let row = rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("pricing"))?;
            fixture::patch(row, patch);
            Ok(row.clone())
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().await.remove(&id).is_some())
        }
    }

    mod fixture {
        use super::*;

        pub fn from_new(id: i32, n: NewPricing) -> Model {
            Model {
                id,
                meal_plan: n.meal_plan,
                price: n.price,
                food_type: n.food_type,
                people_count: n.people_count,
                frequency: n.frequency,
                meal_details: n.meal_details,
                utensil_washing_price: n.utensil_washing_price,
                utensil_washing_commission: n.utensil_washing_commission,
                children_special_price: n.children_special_price,
                preference_community_percentage: n.preference_community_percentage,
                kitchen_platform_price: n.kitchen_platform_price,
                created_at: Default::default(),
            }
        }

        pub fn patch(row: &mut Model, p: PricingPatch) {
            if let Some(v) = p.meal_plan { row.meal_plan = v; }
            if let Some(v) = p.price { row.price = v; }
            if let Some(v) = p.people_count { row.people_count = v; }
            if let Some(v) = p.frequency { row.frequency = v; }
        }
    }

    fn service() -> PricingService<MemoryRepo> {
        PricingService::new(Arc::new(MemoryRepo::default()))
    }

    #[tokio::test]
    async fn create_then_get_roundtrips_through_repository() {
        let svc = service();
        let created = svc.create(crate::test_support::sample("Standard", 2, 499.99)).await.unwrap();
        assert_eq!(created.id, 1);
        let found = svc.get(created.id).await.unwrap().unwrap();
        assert_eq!(found.meal_plan, "Standard");
    }

    #[tokio::test]
    async fn list_honours_skip_and_limit() {
        let svc = service();
        for n in 1..=5 {
            svc.create(crate::test_support::sample("Plan", n, 100.0 * n as f64)).await.unwrap();
        }
        let page = svc.list(Pagination { skip: 1, limit: 2 }).await.unwrap();
        let counts: Vec<i32> = page.iter().map(|m| m.people_count).collect();
        assert_eq!(counts, vec![2, 3]);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let svc = service();
        let err = svc.update(42, PricingPatch::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_whether_row_existed() {
        let svc = service();
        let created = svc.create(crate::test_support::sample("Plan", 1, 10.0)).await.unwrap();
        assert!(svc.delete(created.id).await.unwrap());
        assert!(!svc.delete(created.id).await.unwrap());
    }
}
