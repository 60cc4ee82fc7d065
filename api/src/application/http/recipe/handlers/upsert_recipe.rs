use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::application::http::{
    recipe::validators::UpsertRecipeRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use cafecrunch_core::domain::recipe::{
    entities::{Category, Recipe, Temperature},
    ports::RecipeService,
    value_objects::UpsertRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpsertRecipeResponse {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub temperature: Temperature,
    pub size_ml: i32,
    pub approved: bool,
}

impl From<Recipe> for UpsertRecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            category: recipe.category,
            temperature: recipe.temperature,
            size_ml: recipe.size_ml,
            approved: recipe.approved,
        }
    }
}

#[utoipa::path(
    put,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Upsert recipe",
    description = "Insert a new recipe or replace the existing document with this id",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    request_body = UpsertRecipeRequest,
    responses(
        (status = 201, body = UpsertRecipeResponse, description = "Recipe stored"),
        (status = 400, description = "Invalid recipe document")
    )
)]
pub async fn upsert_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpsertRecipeRequest>,
) -> Result<Response<UpsertRecipeResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let stored = state
        .service
        .upsert_recipe(UpsertRecipeInput {
            id: recipe_id,
            name: request.name,
            category: request.category,
            temperature: request.temperature,
            size_ml: request.size_ml,
            approved: request.approved,
            composition: request.composition,
            defaults: request.defaults,
            options: request.options,
            seasons: request.seasons,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert recipe: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::Created(UpsertRecipeResponse::from(stored)))
}
