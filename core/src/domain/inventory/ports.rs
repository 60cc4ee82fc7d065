use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    inventory::{
        entities::{InventoryItem, InventoryTransaction},
        value_objects::{InventoryStatusRow, InventoryUpdate},
    },
};

/// Repository trait for inventory items
#[cfg_attr(test, mockall::automock)]
pub trait InventoryRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<InventoryItem>, CoreError>> + Send;

    fn get_by_ingredient(
        &self,
        ingredient_id: String,
    ) -> impl Future<Output = Result<Option<InventoryItem>, CoreError>> + Send;

    /// Upsert the item and, when present, append the transaction to the
    /// item's log. The log is append-only; prior history is never replaced.
    fn upsert(
        &self,
        item: InventoryItem,
        transaction: Option<InventoryTransaction>,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait InventoryService: Send + Sync {
    fn list_inventory(
        &self,
    ) -> impl Future<Output = Result<Vec<InventoryStatusRow>, CoreError>> + Send;

    fn get_inventory_item(
        &self,
        ingredient_id: String,
    ) -> impl Future<Output = Result<Option<InventoryStatusRow>, CoreError>> + Send;

    fn update_inventory(
        &self,
        ingredient_id: String,
        update: InventoryUpdate,
    ) -> impl Future<Output = Result<InventoryStatusRow, CoreError>> + Send;
}
