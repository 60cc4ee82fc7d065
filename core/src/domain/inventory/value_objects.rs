use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::inventory::entities::InventoryItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReorderStatus {
    pub is_low: bool,
    pub recommended_qty: i64,
}

/// Counts and thresholds submitted by a quantity edit. `available` is
/// recomputed, never accepted from the caller.
#[derive(Debug, Clone, Default)]
pub struct InventoryUpdate {
    pub on_hand: i64,
    pub reserved: i64,
    pub par_level: i64,
    pub reorder_point: i64,
    pub preferred_reorder_qty: i64,
    pub lead_time_days: i32,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryStatusRow {
    pub item: InventoryItem,
    pub status: ReorderStatus,
}
