use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use service::pagination::Pagination;
use tracing::{error, info};

use models::pricing::{Model, NewPricing, PricingPatch};
use crate::errors::JsonApiError;
use crate::routes::extract::{ApiJson, ApiPath, ApiQuery};
use crate::routes::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Rows to skip (default 0)
    pub skip: Option<u64>,
    /// Maximum rows to return (default 100, at most 1000)
    pub limit: Option<u64>,
}

#[utoipa::path(
    get, path = "/pricing", tag = "pricing",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::PricingDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<ListQuery>) -> Result<Json<Vec<Model>>, JsonApiError> {
    let rows = state.pricing.list(Pagination::new(q.skip, q.limit)).await?;
    info!(count = rows.len(), "list pricing");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/pricing", tag = "pricing",
    request_body = crate::openapi::NewPricingDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::PricingDoc),
        (status = 422, description = "Malformed body"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(input): ApiJson<NewPricing>) -> Result<Json<Model>, JsonApiError> {
    info!(meal_plan = %input.meal_plan, people_count = input.people_count, price = input.price, "pricing_create_request");
    let created = state.pricing.create(input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/pricing/{id}", tag = "pricing",
    params(("id" = i32, Path, description = "Pricing row ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PricingDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<Model>, JsonApiError> {
    match state.pricing.get(id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("pricing {id} not found")))),
    }
}

#[utoipa::path(
    put, path = "/pricing/{id}", tag = "pricing",
    params(("id" = i32, Path, description = "Pricing row ID")),
    request_body = crate::openapi::PricingPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PricingDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>, ApiJson(patch): ApiJson<PricingPatch>) -> Result<Json<Model>, JsonApiError> {
    let updated = state.pricing.update(id, patch).await?;
    info!(id = updated.id, "updated pricing");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/pricing/{id}", tag = "pricing",
    params(("id" = i32, Path, description = "Pricing row ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, JsonApiError> {
    match state.pricing.delete(id).await {
        Ok(true) => { info!(id, "deleted pricing"); Ok(StatusCode::NO_CONTENT) },
        Ok(false) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("pricing {id} not found")))),
        Err(e) => { error!(err = %e, "delete pricing failed"); Err(e.into()) },
    }
}
