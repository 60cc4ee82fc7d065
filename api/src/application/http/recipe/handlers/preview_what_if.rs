use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::application::http::{
    recipe::{handlers::get_recipe_nutrition::NutritionResponse, validators::WhatIfRequest},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use cafecrunch_core::domain::nutrition::{ports::NutritionService, value_objects::WhatIfInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WhatIfResponse {
    pub baseline: NutritionResponse,
    pub adjusted: NutritionResponse,
    pub delta: NutritionResponse,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/what-if",
    tag = "recipe",
    summary = "Preview a what-if adjustment",
    description = "Side-by-side nutrition of the stored recipe and a temporary espresso-shot/syrup-pump adjustment; nothing is persisted",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    request_body = WhatIfRequest,
    responses(
        (status = 200, body = WhatIfResponse),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn preview_what_if(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<WhatIfRequest>,
) -> Result<Response<WhatIfResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let comparison = state
        .service
        .what_if(
            recipe_id.clone(),
            WhatIfInput {
                espresso_shots: f64::from(request.espresso_shots),
                syrup_pumps: f64::from(request.syrup_pumps),
            },
        )
        .await
        .map_err(|e| match e {
            cafecrunch_core::domain::common::entities::app_errors::CoreError::NotFound => {
                ApiError::NotFound(format!("Recipe '{}' not found", recipe_id))
            }
            other => {
                tracing::error!("Failed to compute what-if preview: {}", other);
                ApiError::from(other)
            }
        })?;

    Ok(Response::OK(WhatIfResponse {
        baseline: NutritionResponse::from(comparison.baseline),
        adjusted: NutritionResponse::from(comparison.adjusted),
        delta: NutritionResponse::from(comparison.delta),
    }))
}
