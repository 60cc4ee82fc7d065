use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Counts and thresholds for one inventory item. `available` is derived
/// server-side from `on_hand - reserved` and cannot be submitted.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateInventoryRequest {
    #[validate(range(min = 0, message = "on_hand must not be negative"))]
    pub on_hand: i64,
    #[validate(range(min = 0, message = "reserved must not be negative"))]
    pub reserved: i64,
    #[validate(range(min = 0, message = "par_level must not be negative"))]
    #[serde(default)]
    pub par_level: i64,
    #[validate(range(min = 0, message = "reorder_point must not be negative"))]
    #[serde(default)]
    pub reorder_point: i64,
    #[validate(range(min = 0, message = "preferred_reorder_qty must not be negative"))]
    #[serde(default)]
    pub preferred_reorder_qty: i64,
    #[validate(range(min = 0, message = "lead_time_days must not be negative"))]
    #[serde(default)]
    pub lead_time_days: i32,
    /// Free-text annotation for the transaction log entry.
    pub note: Option<String>,
}
