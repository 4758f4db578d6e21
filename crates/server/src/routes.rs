pub mod extract;
pub mod pricing;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, RootMessage};
use service::pricing::{PricingService, SeaOrmPricingRepository};

use crate::openapi::ApiDoc;

pub type Pricing = PricingService<SeaOrmPricingRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub pricing: Arc<Pricing>,
}

impl ServerState {
    pub fn new(db: sea_orm::DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmPricingRepository::new(db));
        Self { pricing: Arc::new(PricingService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Greeting")))]
pub async fn root() -> Json<RootMessage> {
    Json(RootMessage { message: "Meal pricing API" })
}

/// Build the full application router: root/health, the pricing resource and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Trailing-slash forms are kept for clients written against `/pricing/`
    let api = Router::new()
        .route("/pricing", get(pricing::list).post(pricing::create))
        .route("/pricing/", get(pricing::list).post(pricing::create))
        .route("/pricing/:id", get(pricing::get).put(pricing::update).delete(pricing::delete))
        .with_state(state);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // One INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // Status and latency on response
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and other failures at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
