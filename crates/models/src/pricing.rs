use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, QueryOrder, QuerySelect, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Rows per INSERT statement; keeps bind parameters well under the Postgres limit.
const INSERT_CHUNK: usize = 1000;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pricing_table")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub meal_plan: String,
    pub price: f64,
    pub food_type: String,
    pub people_count: i32,
    pub frequency: String,
    pub meal_details: String,
    pub utensil_washing_price: Option<f64>,
    pub utensil_washing_commission: Option<f64>,
    pub children_special_price: Option<f64>,
    pub preference_community_percentage: Option<f64>,
    pub kitchen_platform_price: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted when creating a row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPricing {
    pub meal_plan: String,
    pub price: f64,
    pub food_type: String,
    pub people_count: i32,
    pub frequency: String,
    pub meal_details: String,
    #[serde(default)]
    pub utensil_washing_price: Option<f64>,
    #[serde(default)]
    pub utensil_washing_commission: Option<f64>,
    #[serde(default)]
    pub children_special_price: Option<f64>,
    #[serde(default)]
    pub preference_community_percentage: Option<f64>,
    #[serde(default)]
    pub kitchen_platform_price: Option<f64>,
}

/// Partial update. `None` leaves the stored value untouched, so an optional
/// column cannot be reset to NULL through a patch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPatch {
    pub meal_plan: Option<String>,
    pub price: Option<f64>,
    pub food_type: Option<String>,
    pub people_count: Option<i32>,
    pub frequency: Option<String>,
    pub meal_details: Option<String>,
    pub utensil_washing_price: Option<f64>,
    pub utensil_washing_commission: Option<f64>,
    pub children_special_price: Option<f64>,
    pub preference_community_percentage: Option<f64>,
    pub kitchen_platform_price: Option<f64>,
}

impl From<NewPricing> for ActiveModel {
    fn from(input: NewPricing) -> Self {
        ActiveModel {
            id: NotSet,
            meal_plan: Set(input.meal_plan),
            price: Set(input.price),
            food_type: Set(input.food_type),
            people_count: Set(input.people_count),
            frequency: Set(input.frequency),
            meal_details: Set(input.meal_details),
            utensil_washing_price: Set(input.utensil_washing_price),
            utensil_washing_commission: Set(input.utensil_washing_commission),
            children_special_price: Set(input.children_special_price),
            preference_community_percentage: Set(input.preference_community_percentage),
            kitchen_platform_price: Set(input.kitchen_platform_price),
            created_at: Set(Utc::now().into()),
        }
    }
}

impl PricingPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy every present field onto the active model.
    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.meal_plan { am.meal_plan = Set(v); }
        if let Some(v) = self.price { am.price = Set(v); }
        if let Some(v) = self.food_type { am.food_type = Set(v); }
        if let Some(v) = self.people_count { am.people_count = Set(v); }
        if let Some(v) = self.frequency { am.frequency = Set(v); }
        if let Some(v) = self.meal_details { am.meal_details = Set(v); }
        if let Some(v) = self.utensil_washing_price { am.utensil_washing_price = Set(Some(v)); }
        if let Some(v) = self.utensil_washing_commission { am.utensil_washing_commission = Set(Some(v)); }
        if let Some(v) = self.children_special_price { am.children_special_price = Set(Some(v)); }
        if let Some(v) = self.preference_community_percentage { am.preference_community_percentage = Set(Some(v)); }
        if let Some(v) = self.kitchen_platform_price { am.kitchen_platform_price = Set(Some(v)); }
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewPricing) -> Result<Model, errors::ModelError> {
    let am: ActiveModel = input.into();
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Offset/limit listing in id order.
pub async fn list<C: ConnectionTrait>(db: &C, offset: u64, limit: u64) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn update<C: ConnectionTrait>(db: &C, id: i32, patch: PricingPatch) -> Result<Model, errors::ModelError> {
    let found = find(db, id)
        .await?
        .ok_or_else(|| errors::ModelError::NotFound(format!("pricing {id}")))?;
    if patch.is_empty() {
        return Ok(found);
    }
    let mut am: ActiveModel = found.into();
    patch.apply(&mut am);
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Returns whether a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

pub async fn delete_all<C: ConnectionTrait>(db: &C) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many().exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}

/// Bulk insert in chunks; returns the number of rows written.
pub async fn insert_many<C: ConnectionTrait>(db: &C, rows: Vec<NewPricing>) -> Result<u64, errors::ModelError> {
    let mut inserted = 0u64;
    let mut rows = rows.into_iter().peekable();
    while rows.peek().is_some() {
        let chunk: Vec<ActiveModel> = rows.by_ref().take(INSERT_CHUNK).map(ActiveModel::from).collect();
        let n = chunk.len() as u64;
        Entity::insert_many(chunk).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
        inserted += n;
    }
    Ok(inserted)
}

#[cfg(test)]
mod unit {
    use super::*;

    fn sample() -> NewPricing {
        NewPricing {
            meal_plan: "Standard".into(),
            price: 499.99,
            food_type: "Veg".into(),
            people_count: 2,
            frequency: "Daily".into(),
            meal_details: "Breakfast and Dinner".into(),
            utensil_washing_price: None,
            utensil_washing_commission: None,
            children_special_price: None,
            preference_community_percentage: None,
            kitchen_platform_price: None,
        }
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut am: ActiveModel = sample().into();
        let patch = PricingPatch { price: Some(10.0), kitchen_platform_price: Some(1.5), ..Default::default() };
        patch.apply(&mut am);
        assert_eq!(am.price, Set(10.0));
        assert_eq!(am.kitchen_platform_price, Set(Some(1.5)));
        assert_eq!(am.meal_plan, Set("Standard".to_string()));
        assert_eq!(am.utensil_washing_price, Set(None));
    }

    #[test]
    fn empty_patch_detected() {
        assert!(PricingPatch::default().is_empty());
        assert!(!PricingPatch { people_count: Some(3), ..Default::default() }.is_empty());
    }

    #[test]
    fn new_pricing_leaves_id_unset() {
        let am: ActiveModel = sample().into();
        assert!(am.id.is_not_set());
    }

    #[test]
    fn new_pricing_optional_fields_default_from_json() {
        let input: NewPricing = serde_json::from_value(serde_json::json!({
            "meal_plan": "Standard",
            "price": 499.99,
            "food_type": "Veg",
            "people_count": 2,
            "frequency": "Daily",
            "meal_details": "Breakfast and Dinner",
        }))
        .unwrap();
        assert_eq!(input, sample());
    }

    #[test]
    fn patch_treats_null_as_absent() {
        let patch: PricingPatch = serde_json::from_value(serde_json::json!({
            "price": null,
            "frequency": "Weekly",
        }))
        .unwrap();
        assert_eq!(patch, PricingPatch { frequency: Some("Weekly".into()), ..Default::default() });
    }
}
