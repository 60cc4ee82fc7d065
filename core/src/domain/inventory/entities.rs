use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Stock record for one ingredient. `available` is derived from
/// `on_hand - reserved` (never negative) and is only trustworthy through
/// [`InventoryItem::available`], never read independently of that
/// relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub ingredient_id: String,
    pub on_hand: i64,
    pub reserved: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,
    pub par_level: i64,
    pub reorder_point: i64,
    pub preferred_reorder_qty: i64,
    pub lead_time_days: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_unit: Option<String>,
    #[serde(default)]
    pub transactions: Vec<InventoryTransaction>,
}

impl InventoryItem {
    pub fn available(&self) -> i64 {
        self.available
            .unwrap_or_else(|| (self.on_hand - self.reserved).max(0))
    }
}

/// Append-only stock movement. Quantity edits append one of these instead
/// of silently overwriting counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryTransaction {
    pub id: Uuid,
    pub ingredient_id: String,
    pub ts: DateTime<Utc>,
    pub kind: String,
    pub qty_delta: i64,
    pub qty_after: i64,
    pub unit: String,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InventoryTransactionConfig {
    pub ingredient_id: String,
    pub kind: String,
    pub qty_delta: i64,
    pub qty_after: i64,
    pub unit: String,
    pub reference: String,
    pub note: Option<String>,
}

impl InventoryTransaction {
    pub fn new(config: InventoryTransactionConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            ingredient_id: config.ingredient_id,
            ts: now,
            kind: config.kind,
            qty_delta: config.qty_delta,
            qty_after: config.qty_after,
            unit: config.unit,
            reference: config.reference,
            note: config.note,
        }
    }
}
