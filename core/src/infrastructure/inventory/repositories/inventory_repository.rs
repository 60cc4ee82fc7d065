use std::collections::HashMap;

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        inventory::{
            entities::{InventoryItem, InventoryTransaction},
            ports::InventoryRepository,
        },
    },
    entity::{
        inventory_items::{Column, Entity},
        inventory_transactions::{Column as TransactionColumn, Entity as TransactionEntity},
    },
    infrastructure::inventory::mappers::{
        item_to_active_model, map_item, transaction_to_active_model,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresInventoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl InventoryRepository for PostgresInventoryRepository {
    async fn list(&self) -> Result<Vec<InventoryItem>, CoreError> {
        let models = Entity::find()
            .order_by_asc(Column::IngredientId)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list inventory items: {}", e);
                CoreError::InternalServerError
            })?;

        let ingredient_ids: Vec<String> = models.iter().map(|m| m.ingredient_id.clone()).collect();
        let all_transactions = if !ingredient_ids.is_empty() {
            TransactionEntity::find()
                .filter(TransactionColumn::IngredientId.is_in(ingredient_ids))
                .order_by(TransactionColumn::Ts, Order::Asc)
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to load inventory transactions: {}", e);
                    CoreError::InternalServerError
                })?
        } else {
            Vec::new()
        };

        let mut transactions_map: HashMap<String, Vec<_>> = HashMap::new();
        for transaction in all_transactions {
            transactions_map
                .entry(transaction.ingredient_id.clone())
                .or_default()
                .push(transaction);
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let transactions = transactions_map
                    .remove(&model.ingredient_id)
                    .unwrap_or_default();
                map_item(model, transactions)
            })
            .collect())
    }

    async fn get_by_ingredient(
        &self,
        ingredient_id: String,
    ) -> Result<Option<InventoryItem>, CoreError> {
        let model = Entity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get inventory item: {}", e);
                CoreError::InternalServerError
            })?;

        if let Some(model) = model {
            let transactions = TransactionEntity::find()
                .filter(TransactionColumn::IngredientId.eq(model.ingredient_id.clone()))
                .order_by(TransactionColumn::Ts, Order::Asc)
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to load inventory transactions: {}", e);
                    CoreError::InternalServerError
                })?;

            Ok(Some(map_item(model, transactions)))
        } else {
            Ok(None)
        }
    }

    async fn upsert(
        &self,
        item: InventoryItem,
        transaction: Option<InventoryTransaction>,
    ) -> Result<InventoryItem, CoreError> {
        Entity::insert(item_to_active_model(&item))
            .on_conflict(
                OnConflict::column(Column::IngredientId)
                    .update_columns([
                        Column::OnHand,
                        Column::Reserved,
                        Column::Available,
                        Column::ParLevel,
                        Column::ReorderPoint,
                        Column::PreferredReorderQty,
                        Column::LeadTimeDays,
                        Column::StockUnit,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert inventory item: {}", e);
                CoreError::InternalServerError
            })?;

        // Append-only log: new rows only, nothing rewritten.
        if let Some(transaction) = transaction {
            TransactionEntity::insert(transaction_to_active_model(&transaction))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to append inventory transaction: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        self.get_by_ingredient(item.ingredient_id.clone())
            .await?
            .ok_or(CoreError::InternalServerError)
    }
}
