use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cafecrunch_core::domain::ingredient::{entities::Ingredient, ports::IngredientService};

#[utoipa::path(
    get,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Get ingredient",
    params(
        ("ingredient_id" = String, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = Ingredient),
        (status = 404, description = "Ingredient not found")
    )
)]
pub async fn get_ingredient(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Ingredient>, ApiError> {
    let ingredient = state
        .service
        .get_ingredient(ingredient_id.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to get ingredient: {}", e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::NotFound(format!("Ingredient '{}' not found", ingredient_id)))?;

    Ok(Response::OK(ingredient))
}
