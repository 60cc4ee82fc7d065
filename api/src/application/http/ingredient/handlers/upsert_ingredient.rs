use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::application::http::{
    ingredient::validators::UpsertIngredientRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use cafecrunch_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientService, value_objects::UpsertIngredientInput,
};

#[utoipa::path(
    put,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Upsert ingredient",
    description = "Insert a new ingredient or replace the existing document with this id",
    params(
        ("ingredient_id" = String, Path, description = "Ingredient ID"),
    ),
    request_body = UpsertIngredientRequest,
    responses(
        (status = 201, body = Ingredient, description = "Ingredient stored"),
        (status = 400, description = "Invalid ingredient document")
    )
)]
pub async fn upsert_ingredient(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpsertIngredientRequest>,
) -> Result<Response<Ingredient>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let stored = state
        .service
        .upsert_ingredient(UpsertIngredientInput {
            id: ingredient_id,
            name: request.name,
            unit: request.unit,
            unit_ml: request.unit_ml,
            nutrition_per_unit: request.nutrition_per_unit,
            tags: request.tags,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert ingredient: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::Created(stored))
}
