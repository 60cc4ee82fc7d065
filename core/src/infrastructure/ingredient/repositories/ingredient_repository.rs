use std::collections::HashMap;

use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::{entities::Ingredient, ports::IngredientRepository},
    },
    entity::ingredients::{Column, Entity},
    infrastructure::ingredient::mappers::to_active_model,
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn list(&self) -> Result<Vec<Ingredient>, CoreError> {
        let models = Entity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(Ingredient::from).collect())
    }

    async fn get_by_id(&self, ingredient_id: String) -> Result<Option<Ingredient>, CoreError> {
        let model = Entity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Ingredient::from))
    }

    async fn ingredient_map(&self) -> Result<HashMap<String, Ingredient>, CoreError> {
        let models = Entity::find().all(&self.db).await.map_err(|e| {
            error!("Failed to load ingredient map: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(models
            .into_iter()
            .map(|model| (model.id.clone(), Ingredient::from(model)))
            .collect())
    }

    async fn upsert(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let created = Entity::insert(to_active_model(&ingredient))
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Name,
                        Column::Unit,
                        Column::UnitMl,
                        Column::NutritionPerUnit,
                        Column::Tags,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Ingredient::from(created))
    }

    async fn delete(&self, ingredient_id: String) -> Result<u64, CoreError> {
        let result = Entity::delete_by_id(ingredient_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
