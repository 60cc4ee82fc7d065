use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::application::http::{
    recipe::validators::UpdateDefaultsRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use cafecrunch_core::domain::recipe::{ports::RecipeService, value_objects::DefaultsPatch};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateDefaultsResponse {
    pub modified_count: u64,
}

#[utoipa::path(
    patch,
    path = "/{recipe_id}/defaults",
    tag = "recipe",
    summary = "Update recipe defaults",
    description = "Patch the defaults record (milk, syrup, shot and pump counts); absent fields are untouched",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    request_body = UpdateDefaultsRequest,
    responses(
        (status = 200, body = UpdateDefaultsResponse),
        (status = 400, description = "Invalid patch")
    )
)]
pub async fn update_recipe_defaults(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdateDefaultsRequest>,
) -> Result<Response<UpdateDefaultsResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let modified_count = state
        .service
        .update_recipe_defaults(
            recipe_id,
            DefaultsPatch {
                milk_id: request.milk_id,
                syrup_id: request.syrup_id,
                espresso_shots: request.espresso_shots,
                syrup_pumps: request.syrup_pumps,
            },
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to update recipe defaults: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(UpdateDefaultsResponse { modified_count }))
}
