use std::collections::HashMap;

use tracing::warn;

use crate::domain::{
    analytics::ports::AnalyticsRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::{entities::Ingredient, ports::IngredientRepository},
    inventory::ports::InventoryRepository,
    nutrition::{
        helpers::{apply_what_if, totals},
        ports::NutritionService,
        value_objects::{NutritionTotals, WhatIfComparison, WhatIfInput},
    },
    recipe::{entities::Recipe, ports::RecipeRepository},
};

fn warn_unknown_ingredients(recipe: &Recipe, ingredients: &HashMap<String, Ingredient>) {
    for entry in &recipe.composition {
        if !ingredients.contains_key(&entry.ingredient_id) {
            warn!(
                recipe_id = %recipe.id,
                ingredient_id = %entry.ingredient_id,
                "composition references an unknown ingredient, contributing zero nutrition"
            );
        }
    }
}

impl<I, R, V, A, HC> NutritionService for Service<I, R, V, A, HC>
where
    I: IngredientRepository,
    R: RecipeRepository,
    V: InventoryRepository,
    A: AnalyticsRepository,
    HC: HealthCheckRepository,
{
    async fn recipe_nutrition(&self, recipe_id: String) -> Result<NutritionTotals, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let ingredients = self.ingredient_repository.ingredient_map().await?;
        warn_unknown_ingredients(&recipe, &ingredients);

        Ok(totals(&recipe.composition, &ingredients))
    }

    async fn what_if(
        &self,
        recipe_id: String,
        input: WhatIfInput,
    ) -> Result<WhatIfComparison, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let ingredients = self.ingredient_repository.ingredient_map().await?;
        warn_unknown_ingredients(&recipe, &ingredients);

        let baseline = totals(&recipe.composition, &ingredients);
        let adjusted_composition =
            apply_what_if(&recipe, input.espresso_shots, input.syrup_pumps);
        let adjusted = totals(&adjusted_composition, &ingredients);

        Ok(WhatIfComparison {
            baseline,
            adjusted,
            delta: NutritionTotals::delta(baseline, adjusted),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        analytics::ports::MockAnalyticsRepository,
        health::ports::MockHealthCheckRepository,
        ingredient::ports::MockIngredientRepository,
        inventory::ports::MockInventoryRepository,
        nutrition::value_objects::NutritionPerUnit,
        recipe::{
            entities::{Amount, Category, CompositionEntry, RecipeDefaults, RecipeOptions, Temperature},
            ports::MockRecipeRepository,
        },
    };

    fn mocked_service(
        recipe: Option<Recipe>,
        ingredients: HashMap<String, Ingredient>,
    ) -> Service<
        MockIngredientRepository,
        MockRecipeRepository,
        MockInventoryRepository,
        MockAnalyticsRepository,
        MockHealthCheckRepository,
    > {
        let mut recipe_repository = MockRecipeRepository::new();
        recipe_repository
            .expect_get_by_id()
            .returning(move |_| {
                let recipe = recipe.clone();
                Box::pin(async move { Ok(recipe) })
            });

        let mut ingredient_repository = MockIngredientRepository::new();
        ingredient_repository
            .expect_ingredient_map()
            .returning(move || {
                let ingredients = ingredients.clone();
                Box::pin(async move { Ok(ingredients) })
            });

        Service::new(
            ingredient_repository,
            recipe_repository,
            MockInventoryRepository::new(),
            MockAnalyticsRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn mocha() -> Recipe {
        Recipe {
            id: "mocha_medium".to_string(),
            name: "Mocha (Medium)".to_string(),
            category: Category::Core,
            temperature: Temperature::Hot,
            size_ml: 473,
            approved: true,
            composition: vec![
                CompositionEntry {
                    ingredient_id: "espresso_shot".to_string(),
                    amount: Amount::Shots(2.0),
                },
                CompositionEntry {
                    ingredient_id: "syrup_vanilla".to_string(),
                    amount: Amount::Pumps(3.0),
                },
            ],
            defaults: RecipeDefaults {
                syrup_id: Some("syrup_vanilla".to_string()),
                ..Default::default()
            },
            options: RecipeOptions::default(),
            seasons: Vec::new(),
        }
    }

    fn mocha_ingredients() -> HashMap<String, Ingredient> {
        let mut map = HashMap::new();
        map.insert(
            "espresso_shot".to_string(),
            Ingredient {
                id: "espresso_shot".to_string(),
                name: "Espresso shot".to_string(),
                unit: "shot".to_string(),
                unit_ml: 30.0,
                nutrition_per_unit: NutritionPerUnit {
                    calories: 5.0,
                    caffeine_mg: 65.0,
                    ..Default::default()
                },
                tags: Vec::new(),
            },
        );
        map.insert(
            "syrup_vanilla".to_string(),
            Ingredient {
                id: "syrup_vanilla".to_string(),
                name: "Vanilla syrup".to_string(),
                unit: "pump".to_string(),
                unit_ml: 10.0,
                nutrition_per_unit: NutritionPerUnit {
                    calories: 20.0,
                    sugar_g: 5.0,
                    ..Default::default()
                },
                tags: Vec::new(),
            },
        );
        map
    }

    #[tokio::test]
    async fn what_if_reports_baseline_adjusted_and_delta() {
        let service = mocked_service(Some(mocha()), mocha_ingredients());

        let comparison = service
            .what_if(
                "mocha_medium".to_string(),
                WhatIfInput {
                    espresso_shots: 1.0,
                    syrup_pumps: 1.0,
                },
            )
            .await
            .unwrap();

        assert_eq!(comparison.baseline.calories, 70.0);
        assert_eq!(comparison.adjusted.calories, 25.0);
        assert_eq!(comparison.delta.calories, -45.0);
        assert_eq!(comparison.delta.caffeine_mg, -65.0);
    }

    #[tokio::test]
    async fn nutrition_of_missing_recipe_is_not_found() {
        let service = mocked_service(None, HashMap::new());

        let result = service.recipe_nutrition("nope".to_string()).await;

        assert_eq!(result, Err(CoreError::NotFound));
    }
}
