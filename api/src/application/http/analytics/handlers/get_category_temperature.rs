use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cafecrunch_core::domain::analytics::{
    ports::AnalyticsService, value_objects::CategoryTemperatureCount,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCategoryTemperatureResponse {
    pub data: Vec<CategoryTemperatureCount>,
}

#[utoipa::path(
    get,
    path = "/category-temperature",
    tag = "analytics",
    summary = "Recipes by category and temperature",
    responses(
        (status = 200, body = GetCategoryTemperatureResponse)
    )
)]
pub async fn get_category_temperature(
    State(state): State<AppState>,
) -> Result<Response<GetCategoryTemperatureResponse>, ApiError> {
    let data = state
        .service
        .category_temperature_counts()
        .await
        .map_err(|e| {
            tracing::error!("Failed to aggregate category/temperature counts: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(GetCategoryTemperatureResponse { data }))
}
