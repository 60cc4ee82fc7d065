use crate::domain::{
    analytics::ports::AnalyticsRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    inventory::{
        entities::{InventoryItem, InventoryTransaction, InventoryTransactionConfig},
        policies::reorder_status,
        ports::{InventoryRepository, InventoryService},
        value_objects::{InventoryStatusRow, InventoryUpdate},
    },
    recipe::ports::RecipeRepository,
};

const ADJUST_KIND: &str = "adjust";
const EDIT_REFERENCE: &str = "inventory-edit";

impl<I, R, V, A, HC> InventoryService for Service<I, R, V, A, HC>
where
    I: IngredientRepository,
    R: RecipeRepository,
    V: InventoryRepository,
    A: AnalyticsRepository,
    HC: HealthCheckRepository,
{
    async fn list_inventory(&self) -> Result<Vec<InventoryStatusRow>, CoreError> {
        let items = self.inventory_repository.list().await?;

        Ok(items
            .into_iter()
            .map(|item| {
                let status = reorder_status(&item);
                InventoryStatusRow { item, status }
            })
            .collect())
    }

    async fn get_inventory_item(
        &self,
        ingredient_id: String,
    ) -> Result<Option<InventoryStatusRow>, CoreError> {
        let item = self
            .inventory_repository
            .get_by_ingredient(ingredient_id)
            .await?;

        Ok(item.map(|item| {
            let status = reorder_status(&item);
            InventoryStatusRow { item, status }
        }))
    }

    async fn update_inventory(
        &self,
        ingredient_id: String,
        update: InventoryUpdate,
    ) -> Result<InventoryStatusRow, CoreError> {
        let current = self
            .inventory_repository
            .get_by_ingredient(ingredient_id.clone())
            .await?
            .unwrap_or_else(|| InventoryItem {
                ingredient_id: ingredient_id.clone(),
                ..Default::default()
            });

        let item = InventoryItem {
            ingredient_id: ingredient_id.clone(),
            on_hand: update.on_hand,
            reserved: update.reserved,
            available: Some((update.on_hand - update.reserved).max(0)),
            par_level: update.par_level,
            reorder_point: update.reorder_point,
            preferred_reorder_qty: update.preferred_reorder_qty,
            lead_time_days: update.lead_time_days,
            stock_unit: current.stock_unit.clone(),
            transactions: Vec::new(),
        };

        // Only on-hand movements are logged; threshold edits are not stock
        // movements.
        let delta = update.on_hand - current.on_hand;
        let transaction = (delta != 0).then(|| {
            InventoryTransaction::new(InventoryTransactionConfig {
                ingredient_id,
                kind: ADJUST_KIND.to_string(),
                qty_delta: delta,
                qty_after: update.on_hand,
                unit: current
                    .stock_unit
                    .clone()
                    .unwrap_or_else(|| "unit".to_string()),
                reference: EDIT_REFERENCE.to_string(),
                note: update.note.clone(),
            })
        });

        let saved = self.inventory_repository.upsert(item, transaction).await?;
        let status = reorder_status(&saved);

        Ok(InventoryStatusRow { item: saved, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        analytics::ports::MockAnalyticsRepository, health::ports::MockHealthCheckRepository,
        ingredient::ports::MockIngredientRepository, inventory::ports::MockInventoryRepository,
        recipe::ports::MockRecipeRepository,
    };

    fn service_with_inventory(
        inventory_repository: MockInventoryRepository,
    ) -> Service<
        MockIngredientRepository,
        MockRecipeRepository,
        MockInventoryRepository,
        MockAnalyticsRepository,
        MockHealthCheckRepository,
    > {
        Service::new(
            MockIngredientRepository::new(),
            MockRecipeRepository::new(),
            inventory_repository,
            MockAnalyticsRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn existing_item() -> InventoryItem {
        InventoryItem {
            ingredient_id: "espresso_beans".to_string(),
            on_hand: 12,
            reserved: 2,
            available: Some(10),
            par_level: 20,
            reorder_point: 8,
            preferred_reorder_qty: 0,
            lead_time_days: 3,
            stock_unit: Some("bag".to_string()),
            transactions: Vec::new(),
        }
    }

    #[tokio::test]
    async fn on_hand_change_appends_an_adjust_transaction() {
        let mut inventory_repository = MockInventoryRepository::new();
        inventory_repository
            .expect_get_by_ingredient()
            .returning(|_| Box::pin(async { Ok(Some(existing_item())) }));
        inventory_repository
            .expect_upsert()
            .withf(|item, transaction| {
                let Some(transaction) = transaction else {
                    return false;
                };
                item.available == Some(5)
                    && transaction.kind == "adjust"
                    && transaction.qty_delta == -5
                    && transaction.qty_after == 7
                    && transaction.unit == "bag"
            })
            .returning(|item, _| Box::pin(async move { Ok(item) }));

        let service = service_with_inventory(inventory_repository);

        let row = service
            .update_inventory(
                "espresso_beans".to_string(),
                InventoryUpdate {
                    on_hand: 7,
                    reserved: 2,
                    par_level: 20,
                    reorder_point: 8,
                    preferred_reorder_qty: 0,
                    lead_time_days: 3,
                    note: Some("weekly count".to_string()),
                },
            )
            .await
            .unwrap();

        assert!(row.status.is_low);
        assert_eq!(row.status.recommended_qty, 15);
    }

    #[tokio::test]
    async fn threshold_only_edit_logs_no_transaction() {
        let mut inventory_repository = MockInventoryRepository::new();
        inventory_repository
            .expect_get_by_ingredient()
            .returning(|_| Box::pin(async { Ok(Some(existing_item())) }));
        inventory_repository
            .expect_upsert()
            .withf(|_, transaction| transaction.is_none())
            .returning(|item, _| Box::pin(async move { Ok(item) }));

        let service = service_with_inventory(inventory_repository);

        let row = service
            .update_inventory(
                "espresso_beans".to_string(),
                InventoryUpdate {
                    on_hand: 12,
                    reserved: 2,
                    par_level: 30,
                    reorder_point: 8,
                    preferred_reorder_qty: 6,
                    lead_time_days: 3,
                    note: None,
                },
            )
            .await
            .unwrap();

        assert!(!row.status.is_low);
    }
}
