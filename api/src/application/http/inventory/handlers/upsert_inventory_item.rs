use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::application::http::{
    inventory::{handlers::get_inventory::InventoryItemResponse, validators::UpdateInventoryRequest},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use cafecrunch_core::domain::inventory::{
    ports::InventoryService, value_objects::InventoryUpdate,
};

#[utoipa::path(
    put,
    path = "/{ingredient_id}",
    tag = "inventory",
    summary = "Update inventory item",
    description = "Upsert counts and thresholds; an on-hand change appends an adjust transaction to the log",
    params(
        ("ingredient_id" = String, Path, description = "Ingredient ID"),
    ),
    request_body = UpdateInventoryRequest,
    responses(
        (status = 200, body = InventoryItemResponse),
        (status = 400, description = "Invalid quantities")
    )
)]
pub async fn upsert_inventory_item(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdateInventoryRequest>,
) -> Result<Response<InventoryItemResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let row = state
        .service
        .update_inventory(
            ingredient_id,
            InventoryUpdate {
                on_hand: request.on_hand,
                reserved: request.reserved,
                par_level: request.par_level,
                reorder_point: request.reorder_point,
                preferred_reorder_qty: request.preferred_reorder_qty,
                lead_time_days: request.lead_time_days,
                note: request.note,
            },
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to update inventory item: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(InventoryItemResponse::from(row)))
}
