use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cafecrunch_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteRecipeResponse {
    pub removed_count: u64,
}

#[utoipa::path(
    delete,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Delete recipe",
    description = "Delete a recipe by id; reports how many documents were removed",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = DeleteRecipeResponse),
    )
)]
pub async fn delete_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteRecipeResponse>, ApiError> {
    let removed_count = state.service.delete_recipe(recipe_id).await.map_err(|e| {
        tracing::error!("Failed to delete recipe: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(DeleteRecipeResponse { removed_count }))
}
