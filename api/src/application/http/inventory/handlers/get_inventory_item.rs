use axum::extract::{Path, State};

use crate::application::http::{
    inventory::handlers::get_inventory::InventoryItemResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use cafecrunch_core::domain::inventory::ports::InventoryService;

#[utoipa::path(
    get,
    path = "/{ingredient_id}",
    tag = "inventory",
    summary = "Get inventory item",
    params(
        ("ingredient_id" = String, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = InventoryItemResponse),
        (status = 404, description = "No inventory record for this ingredient")
    )
)]
pub async fn get_inventory_item(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<InventoryItemResponse>, ApiError> {
    let row = state
        .service
        .get_inventory_item(ingredient_id.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to get inventory item: {}", e);
            ApiError::from(e)
        })?
        .ok_or_else(|| {
            ApiError::NotFound(format!("No inventory record for '{}'", ingredient_id))
        })?;

    Ok(Response::OK(InventoryItemResponse::from(row)))
}
