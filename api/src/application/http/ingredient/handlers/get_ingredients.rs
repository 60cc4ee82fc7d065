use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cafecrunch_core::domain::ingredient::{entities::Ingredient, ports::IngredientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "List ingredients",
    description = "All ingredients sorted by name, with per-unit nutrition and tags",
    responses(
        (status = 200, body = GetIngredientsResponse)
    )
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let data = state.service.list_ingredients().await.map_err(|e| {
        tracing::error!("Failed to list ingredients: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetIngredientsResponse { data }))
}
