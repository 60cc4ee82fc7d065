use super::handlers::{
    delete_recipe::{__path_delete_recipe, delete_recipe},
    get_recipe::{__path_get_recipe, get_recipe},
    get_recipe_nutrition::{__path_get_recipe_nutrition, get_recipe_nutrition},
    get_recipes::{__path_get_recipes, get_recipes},
    preview_what_if::{__path_preview_what_if, preview_what_if},
    update_recipe_defaults::{__path_update_recipe_defaults, update_recipe_defaults},
    upsert_recipe::{__path_upsert_recipe, upsert_recipe},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_recipes,
    get_recipe,
    upsert_recipe,
    delete_recipe,
    update_recipe_defaults,
    get_recipe_nutrition,
    preview_what_if
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/recipes", root_path), get(get_recipes))
        .route(
            &format!("{}/recipes/{{recipe_id}}", root_path),
            get(get_recipe).put(upsert_recipe).delete(delete_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/defaults", root_path),
            patch(update_recipe_defaults),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/nutrition", root_path),
            get(get_recipe_nutrition),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/what-if", root_path),
            post(preview_what_if),
        )
}
