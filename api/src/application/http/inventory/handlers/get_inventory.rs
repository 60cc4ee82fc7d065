use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cafecrunch_core::domain::inventory::{
    entities::InventoryTransaction, ports::InventoryService, value_objects::InventoryStatusRow,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct InventoryItemResponse {
    pub ingredient_id: String,
    pub on_hand: i64,
    pub reserved: i64,
    pub available: i64,
    pub par_level: i64,
    pub reorder_point: i64,
    pub preferred_reorder_qty: i64,
    pub lead_time_days: i32,
    pub stock_unit: Option<String>,
    pub is_low: bool,
    pub recommended_order_qty: i64,
    pub transactions: Vec<InventoryTransaction>,
}

impl From<InventoryStatusRow> for InventoryItemResponse {
    fn from(row: InventoryStatusRow) -> Self {
        let available = row.item.available();
        Self {
            ingredient_id: row.item.ingredient_id,
            on_hand: row.item.on_hand,
            reserved: row.item.reserved,
            available,
            par_level: row.item.par_level,
            reorder_point: row.item.reorder_point,
            preferred_reorder_qty: row.item.preferred_reorder_qty,
            lead_time_days: row.item.lead_time_days,
            stock_unit: row.item.stock_unit,
            is_low: row.status.is_low,
            recommended_order_qty: row.status.recommended_qty,
            transactions: row.item.transactions,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetInventoryResponse {
    pub data: Vec<InventoryItemResponse>,
    /// Number of items below their reorder point.
    pub low_count: i64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "inventory",
    summary = "List inventory",
    description = "All inventory items with reorder status and transaction history",
    responses(
        (status = 200, body = GetInventoryResponse)
    )
)]
pub async fn get_inventory(
    State(state): State<AppState>,
) -> Result<Response<GetInventoryResponse>, ApiError> {
    let rows = state.service.list_inventory().await.map_err(|e| {
        tracing::error!("Failed to list inventory: {}", e);
        ApiError::from(e)
    })?;

    let data: Vec<InventoryItemResponse> =
        rows.into_iter().map(InventoryItemResponse::from).collect();
    let low_count = data.iter().filter(|item| item.is_low).count() as i64;

    Ok(Response::OK(GetInventoryResponse { data, low_count }))
}
