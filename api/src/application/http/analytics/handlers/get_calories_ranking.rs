use axum::extract::{Query, State};

use crate::application::http::{
    analytics::validators::TopNParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use cafecrunch_core::domain::analytics::{
    ports::AnalyticsService, value_objects::RecipeNutritionRow,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCaloriesRankingResponse {
    pub data: Vec<RecipeNutritionRow>,
}

#[utoipa::path(
    get,
    path = "/calories-ranking",
    tag = "analytics",
    summary = "Highest-calorie recipes",
    description = "Recipes ranked by computed calories, with sugar and caffeine alongside",
    params(TopNParams),
    responses(
        (status = 200, body = GetCaloriesRankingResponse)
    )
)]
pub async fn get_calories_ranking(
    State(state): State<AppState>,
    Query(params): Query<TopNParams>,
) -> Result<Response<GetCaloriesRankingResponse>, ApiError> {
    let data = state
        .service
        .calories_ranking(params.top_or_default())
        .await
        .map_err(|e| {
            tracing::error!("Failed to rank recipes by calories: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(GetCaloriesRankingResponse { data }))
}
