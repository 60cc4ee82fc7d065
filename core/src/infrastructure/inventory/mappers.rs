use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::inventory::entities::{InventoryItem, InventoryTransaction};
use crate::entity::{inventory_items, inventory_transactions};

impl From<inventory_transactions::Model> for InventoryTransaction {
    fn from(model: inventory_transactions::Model) -> Self {
        InventoryTransaction {
            id: model.id,
            ingredient_id: model.ingredient_id,
            ts: model.ts.with_timezone(&Utc),
            kind: model.kind,
            qty_delta: model.qty_delta,
            qty_after: model.qty_after,
            unit: model.unit,
            reference: model.reference,
            note: model.note,
        }
    }
}

pub fn map_item(
    model: inventory_items::Model,
    transactions: Vec<inventory_transactions::Model>,
) -> InventoryItem {
    InventoryItem {
        ingredient_id: model.ingredient_id,
        on_hand: model.on_hand,
        reserved: model.reserved,
        available: model.available,
        par_level: model.par_level,
        reorder_point: model.reorder_point,
        preferred_reorder_qty: model.preferred_reorder_qty,
        lead_time_days: model.lead_time_days,
        stock_unit: model.stock_unit,
        transactions: transactions
            .into_iter()
            .map(InventoryTransaction::from)
            .collect(),
    }
}

pub fn item_to_active_model(item: &InventoryItem) -> inventory_items::ActiveModel {
    inventory_items::ActiveModel {
        ingredient_id: Set(item.ingredient_id.clone()),
        on_hand: Set(item.on_hand),
        reserved: Set(item.reserved),
        available: Set(item.available),
        par_level: Set(item.par_level),
        reorder_point: Set(item.reorder_point),
        preferred_reorder_qty: Set(item.preferred_reorder_qty),
        lead_time_days: Set(item.lead_time_days),
        stock_unit: Set(item.stock_unit.clone()),
        updated_at: Set(Utc::now().fixed_offset()),
    }
}

pub fn transaction_to_active_model(
    transaction: &InventoryTransaction,
) -> inventory_transactions::ActiveModel {
    inventory_transactions::ActiveModel {
        id: Set(transaction.id),
        ingredient_id: Set(transaction.ingredient_id.clone()),
        ts: Set(transaction.ts.fixed_offset()),
        kind: Set(transaction.kind.clone()),
        qty_delta: Set(transaction.qty_delta),
        qty_after: Set(transaction.qty_after),
        unit: Set(transaction.unit.clone()),
        reference: Set(transaction.reference.clone()),
        note: Set(transaction.note.clone()),
    }
}
