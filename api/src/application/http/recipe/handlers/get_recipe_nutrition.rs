use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cafecrunch_core::domain::nutrition::{ports::NutritionService, value_objects::NutritionTotals};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NutritionResponse {
    pub calories_kcal: f64,
    pub sugar_g: f64,
    pub caffeine_mg: f64,
}

impl From<NutritionTotals> for NutritionResponse {
    fn from(totals: NutritionTotals) -> Self {
        let rounded = totals.rounded();
        Self {
            calories_kcal: rounded.calories,
            sugar_g: rounded.sugar_g,
            caffeine_mg: rounded.caffeine_mg,
        }
    }
}

#[utoipa::path(
    get,
    path = "/{recipe_id}/nutrition",
    tag = "recipe",
    summary = "Get recipe nutrition",
    description = "Total calories, sugar, and caffeine computed from the recipe composition",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = NutritionResponse),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe_nutrition(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<NutritionResponse>, ApiError> {
    let totals = state
        .service
        .recipe_nutrition(recipe_id.clone())
        .await
        .map_err(|e| match e {
            cafecrunch_core::domain::common::entities::app_errors::CoreError::NotFound => {
                ApiError::NotFound(format!("Recipe '{}' not found", recipe_id))
            }
            other => {
                tracing::error!("Failed to compute recipe nutrition: {}", other);
                ApiError::from(other)
            }
        })?;

    Ok(Response::OK(NutritionResponse::from(totals)))
}
