use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cafecrunch_core::domain::recipe::{
    entities::{Category, CompositionEntry, Recipe, RecipeDefaults, RecipeOptions, Season, Temperature},
    ports::RecipeService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeResponse {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub temperature: Temperature,
    pub size_ml: i32,
    pub approved: bool,
    pub composition: Vec<CompositionEntry>,
    pub defaults: RecipeDefaults,
    pub options: RecipeOptions,
    pub seasons: Vec<Season>,
}

impl From<Recipe> for GetRecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            category: recipe.category,
            temperature: recipe.temperature,
            size_ml: recipe.size_ml,
            approved: recipe.approved,
            composition: recipe.composition,
            defaults: recipe.defaults,
            options: recipe.options,
            seasons: recipe.seasons,
        }
    }
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    description = "Fetch one recipe with its full composition",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = GetRecipeResponse),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(recipe_id.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to get recipe: {}", e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::NotFound(format!("Recipe '{}' not found", recipe_id)))?;

    Ok(Response::OK(GetRecipeResponse::from(recipe)))
}
