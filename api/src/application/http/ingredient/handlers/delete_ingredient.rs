use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cafecrunch_core::domain::ingredient::ports::IngredientService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteIngredientResponse {
    pub removed_count: u64,
}

#[utoipa::path(
    delete,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Delete ingredient",
    description = "Delete an ingredient by id; reports how many documents were removed",
    params(
        ("ingredient_id" = String, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = DeleteIngredientResponse),
    )
)]
pub async fn delete_ingredient(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteIngredientResponse>, ApiError> {
    let removed_count = state
        .service
        .delete_ingredient(ingredient_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete ingredient: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(DeleteIngredientResponse { removed_count }))
}
