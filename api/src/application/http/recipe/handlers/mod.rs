pub mod delete_recipe;
pub mod get_recipe;
pub mod get_recipe_nutrition;
pub mod get_recipes;
pub mod preview_what_if;
pub mod update_recipe_defaults;
pub mod upsert_recipe;
