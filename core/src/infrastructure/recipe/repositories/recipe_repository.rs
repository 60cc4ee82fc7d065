use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::{Recipe, RecipeSummary},
            ports::RecipeRepository,
            value_objects::{DefaultsPatch, RecipeFilter},
        },
    },
    entity::recipes::{Column, Entity},
    infrastructure::recipe::mappers::{parse_category, parse_temperature, to_active_model},
};

const DEFAULT_LIST_LIMIT: u64 = 300;

#[derive(Debug, FromQueryResult)]
struct RecipeSummaryRow {
    id: String,
    name: String,
    category: String,
    temperature: String,
    size_ml: i32,
    approved: bool,
}

impl From<RecipeSummaryRow> for RecipeSummary {
    fn from(row: RecipeSummaryRow) -> Self {
        RecipeSummary {
            id: row.id,
            name: row.name,
            category: parse_category(&row.category),
            temperature: parse_temperature(&row.temperature),
            size_ml: row.size_ml,
            approved: row.approved,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn list(&self, filter: RecipeFilter) -> Result<Vec<RecipeSummary>, CoreError> {
        let mut condition = Condition::all();

        if let Some(category) = filter.category {
            condition = condition.add(Column::Category.eq(category.as_str()));
        }

        if let Some(temperature) = filter.temperature {
            condition = condition.add(Column::Temperature.eq(temperature.as_str()));
        }

        if let Some(size_min) = filter.size_min {
            condition = condition.add(Column::SizeMl.gte(size_min));
        }

        if let Some(size_max) = filter.size_max {
            condition = condition.add(Column::SizeMl.lte(size_max));
        }

        if filter.approved_only {
            condition = condition.add(Column::Approved.eq(true));
        }

        // Composition stays out of the listing projection.
        let rows = Entity::find()
            .select_only()
            .columns([
                Column::Id,
                Column::Name,
                Column::Category,
                Column::Temperature,
                Column::SizeMl,
                Column::Approved,
            ])
            .filter(condition)
            .order_by_asc(Column::Name)
            .limit(filter.limit.unwrap_or(DEFAULT_LIST_LIMIT))
            .into_model::<RecipeSummaryRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().map(RecipeSummary::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, CoreError> {
        let models = Entity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(Recipe::from).collect())
    }

    async fn get_by_id(&self, recipe_id: String) -> Result<Option<Recipe>, CoreError> {
        let model = Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Recipe::from))
    }

    async fn upsert(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let created = Entity::insert(to_active_model(&recipe))
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Name,
                        Column::Category,
                        Column::Temperature,
                        Column::SizeMl,
                        Column::Approved,
                        Column::Composition,
                        Column::Defaults,
                        Column::Options,
                        Column::Seasons,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Recipe::from(created))
    }

    async fn delete(&self, recipe_id: String) -> Result<u64, CoreError> {
        let result = Entity::delete_by_id(recipe_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn update_defaults(
        &self,
        recipe_id: String,
        patch: DefaultsPatch,
    ) -> Result<u64, CoreError> {
        let Some(model) = Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe for defaults update: {}", e);
                CoreError::InternalServerError
            })?
        else {
            return Ok(0);
        };

        let current: crate::domain::recipe::entities::RecipeDefaults =
            serde_json::from_value(model.defaults.clone()).unwrap_or_default();
        let mut updated = current.clone();
        updated.apply_patch(&patch);

        if updated == current {
            return Ok(0);
        }

        let mut active = model.into_active_model();
        active.defaults = Set(serde_json::to_value(&updated).unwrap_or_default());

        Entity::update(active).exec(&self.db).await.map_err(|e| {
            error!("Failed to update recipe defaults: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(1)
    }
}
