use crate::domain::{
    analytics::{
        ports::{AnalyticsRepository, AnalyticsService},
        value_objects::{
            CategoryTemperatureCount, IngredientUsage, MenuOverview, OptionPopularity,
            RecipeNutritionRow, SeasonCount,
        },
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    inventory::ports::InventoryRepository,
    nutrition::{helpers::totals, value_objects::round1},
    recipe::{
        entities::{Category, Season, Temperature},
        ports::RecipeRepository,
    },
};

impl<I, R, V, A, HC> AnalyticsService for Service<I, R, V, A, HC>
where
    I: IngredientRepository,
    R: RecipeRepository,
    V: InventoryRepository,
    A: AnalyticsRepository,
    HC: HealthCheckRepository,
{
    async fn menu_overview(&self) -> Result<MenuOverview, CoreError> {
        let recipes = self.recipe_repository.list_all().await?;
        let ingredients = self.ingredient_repository.list().await?;

        let mut overview = MenuOverview {
            total_recipes: recipes.len() as i64,
            total_ingredients: ingredients.len() as i64,
            ..Default::default()
        };

        let mut season_counts = [0i64; 4];
        for recipe in &recipes {
            match recipe.category {
                Category::Core => overview.core_count += 1,
                Category::Seasonal => overview.seasonal_count += 1,
            }
            match recipe.temperature {
                Temperature::Hot => overview.hot_count += 1,
                Temperature::Iced => overview.iced_count += 1,
            }
            if recipe.approved {
                overview.approved_count += 1;
            }
            for season in &recipe.seasons {
                match season {
                    Season::Fall => season_counts[0] += 1,
                    Season::Winter => season_counts[1] += 1,
                    Season::Spring => season_counts[2] += 1,
                    Season::Summer => season_counts[3] += 1,
                }
            }
        }

        overview.season_counts = [Season::Fall, Season::Winter, Season::Spring, Season::Summer]
            .into_iter()
            .zip(season_counts)
            .map(|(season, count)| SeasonCount { season, count })
            .collect();

        Ok(overview)
    }

    async fn category_temperature_counts(
        &self,
    ) -> Result<Vec<CategoryTemperatureCount>, CoreError> {
        self.analytics_repository
            .counts_by_category_temperature()
            .await
    }

    async fn milk_popularity(&self) -> Result<Vec<OptionPopularity>, CoreError> {
        self.analytics_repository.milk_popularity().await
    }

    async fn ingredient_usage(&self, top_n: u64) -> Result<Vec<IngredientUsage>, CoreError> {
        self.analytics_repository.ingredient_usage(top_n).await
    }

    async fn calories_ranking(&self, top_n: u64) -> Result<Vec<RecipeNutritionRow>, CoreError> {
        let recipes = self.recipe_repository.list_all().await?;
        let ingredients = self.ingredient_repository.ingredient_map().await?;

        let mut rows: Vec<RecipeNutritionRow> = recipes
            .iter()
            .map(|recipe| {
                let nutrition = totals(&recipe.composition, &ingredients);
                RecipeNutritionRow {
                    name: recipe.name.clone(),
                    calories_kcal: round1(nutrition.calories),
                    sugar_g: round1(nutrition.sugar_g),
                    caffeine_mg: round1(nutrition.caffeine_mg),
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.calories_kcal
                .partial_cmp(&a.calories_kcal)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows.truncate(top_n as usize);

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{
        analytics::ports::MockAnalyticsRepository,
        health::ports::MockHealthCheckRepository,
        ingredient::{entities::Ingredient, ports::MockIngredientRepository},
        inventory::ports::MockInventoryRepository,
        nutrition::value_objects::NutritionPerUnit,
        recipe::{
            entities::{
                Amount, CompositionEntry, Recipe, RecipeDefaults, RecipeOptions,
            },
            ports::MockRecipeRepository,
        },
    };

    fn recipe(id: &str, name: &str, pumps: f64) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::Core,
            temperature: Temperature::Hot,
            size_ml: 355,
            approved: true,
            composition: vec![CompositionEntry {
                ingredient_id: "syrup_caramel".to_string(),
                amount: Amount::Pumps(pumps),
            }],
            defaults: RecipeDefaults::default(),
            options: RecipeOptions::default(),
            seasons: Vec::new(),
        }
    }

    #[tokio::test]
    async fn calories_ranking_sorts_descending_and_rounds() {
        let mut recipe_repository = MockRecipeRepository::new();
        recipe_repository.expect_list_all().returning(|| {
            Box::pin(async {
                Ok(vec![
                    recipe("latte_small", "Latte (Small)", 1.0),
                    recipe("mocha_large", "Mocha (Large)", 3.0),
                ])
            })
        });

        let mut ingredient_repository = MockIngredientRepository::new();
        ingredient_repository.expect_ingredient_map().returning(|| {
            Box::pin(async {
                let mut map = HashMap::new();
                map.insert(
                    "syrup_caramel".to_string(),
                    Ingredient {
                        id: "syrup_caramel".to_string(),
                        name: "Caramel syrup".to_string(),
                        unit: "pump".to_string(),
                        unit_ml: 10.0,
                        nutrition_per_unit: NutritionPerUnit {
                            calories: 21.35,
                            sugar_g: 5.04,
                            ..Default::default()
                        },
                        tags: Vec::new(),
                    },
                );
                Ok(map)
            })
        });

        let service = Service::new(
            ingredient_repository,
            recipe_repository,
            MockInventoryRepository::new(),
            MockAnalyticsRepository::new(),
            MockHealthCheckRepository::new(),
        );

        let rows = service.calories_ranking(10).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Mocha (Large)");
        assert_eq!(rows[0].calories_kcal, 64.1);
        assert_eq!(rows[0].sugar_g, 15.1);
        assert_eq!(rows[1].calories_kcal, 21.4);
    }
}
