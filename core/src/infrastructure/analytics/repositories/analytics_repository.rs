use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::error;

use crate::{
    domain::{
        analytics::{
            ports::AnalyticsRepository,
            value_objects::{CategoryTemperatureCount, IngredientUsage, OptionPopularity},
        },
        common::entities::app_errors::CoreError,
    },
    infrastructure::recipe::mappers::{parse_category, parse_temperature},
};

#[derive(Debug, Clone)]
pub struct PostgresAnalyticsRepository {
    pub db: DatabaseConnection,
}

impl PostgresAnalyticsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AnalyticsRepository for PostgresAnalyticsRepository {
    async fn counts_by_category_temperature(
        &self,
    ) -> Result<Vec<CategoryTemperatureCount>, CoreError> {
        let stmt = Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT category, temperature, COUNT(*) AS count
            FROM recipes
            GROUP BY category, temperature
            ORDER BY category, temperature
            "#,
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to aggregate category/temperature counts: {}", e);
            CoreError::InternalServerError
        })?;

        let mut counts = Vec::with_capacity(rows.len());
        for row in rows {
            let category: String = row.try_get("", "category").unwrap_or_default();
            let temperature: String = row.try_get("", "temperature").unwrap_or_default();
            let count: i64 = row.try_get("", "count").unwrap_or(0);

            counts.push(CategoryTemperatureCount {
                category: parse_category(&category),
                temperature: parse_temperature(&temperature),
                count,
            });
        }

        Ok(counts)
    }

    async fn milk_popularity(&self) -> Result<Vec<OptionPopularity>, CoreError> {
        let stmt = Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT milk.value AS ingredient_id, COUNT(*) AS count
            FROM recipes r
            CROSS JOIN LATERAL jsonb_array_elements_text(
                COALESCE(r.options->'milks', '[]'::jsonb)
            ) AS milk(value)
            GROUP BY milk.value
            ORDER BY count DESC, milk.value
            "#,
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to aggregate milk popularity: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(rows
            .into_iter()
            .map(|row| OptionPopularity {
                ingredient_id: row.try_get("", "ingredient_id").unwrap_or_default(),
                count: row.try_get("", "count").unwrap_or(0),
            })
            .collect())
    }

    async fn ingredient_usage(&self, top_n: u64) -> Result<Vec<IngredientUsage>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT entry->>'ingredient_id' AS ingredient_id, COUNT(*) AS count
            FROM recipes r
            CROSS JOIN LATERAL jsonb_array_elements(
                COALESCE(r.composition, '[]'::jsonb)
            ) AS entry
            WHERE entry->>'ingredient_id' IS NOT NULL
            GROUP BY entry->>'ingredient_id'
            ORDER BY count DESC, ingredient_id
            LIMIT $1
            "#,
            [(top_n as i64).into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to aggregate ingredient usage: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(rows
            .into_iter()
            .map(|row| IngredientUsage {
                ingredient_id: row.try_get("", "ingredient_id").unwrap_or_default(),
                count: row.try_get("", "count").unwrap_or(0),
            })
            .collect())
    }
}
