//! Pricing resource: repository seam plus the application service used by the API.

pub mod repository;
pub mod service;

pub use repository::{PricingRepository, SeaOrmPricingRepository};
pub use service::PricingService;
