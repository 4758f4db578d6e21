use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct PricingDoc {
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
    /// RFC 3339 timestamp
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct NewPricingDoc {
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
}

/// Every field optional; null or absent leaves the stored value as is.
#[derive(ToSchema)]
pub struct PricingPatchDoc {
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

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::pricing::list,
        crate::routes::pricing::create,
        crate::routes::pricing::get,
        crate::routes::pricing::update,
        crate::routes::pricing::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PricingDoc,
            NewPricingDoc,
            PricingPatchDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "pricing")
    )
)]
pub struct ApiDoc;
