use axum::extract::{Query, State};

use crate::application::http::{
    analytics::validators::TopNParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use cafecrunch_core::domain::analytics::{ports::AnalyticsService, value_objects::IngredientUsage};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientUsageResponse {
    pub data: Vec<IngredientUsage>,
}

#[utoipa::path(
    get,
    path = "/ingredient-usage",
    tag = "analytics",
    summary = "Most used ingredients",
    description = "Ingredients ranked by how many composition entries reference them",
    params(TopNParams),
    responses(
        (status = 200, body = GetIngredientUsageResponse)
    )
)]
pub async fn get_ingredient_usage(
    State(state): State<AppState>,
    Query(params): Query<TopNParams>,
) -> Result<Response<GetIngredientUsageResponse>, ApiError> {
    let data = state
        .service
        .ingredient_usage(params.top_or_default())
        .await
        .map_err(|e| {
            tracing::error!("Failed to aggregate ingredient usage: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(GetIngredientUsageResponse { data }))
}
