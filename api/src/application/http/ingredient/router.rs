use super::handlers::{
    delete_ingredient::{__path_delete_ingredient, delete_ingredient},
    get_ingredient::{__path_get_ingredient, get_ingredient},
    get_ingredients::{__path_get_ingredients, get_ingredients},
    upsert_ingredient::{__path_upsert_ingredient, upsert_ingredient},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_ingredients,
    get_ingredient,
    upsert_ingredient,
    delete_ingredient
))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/ingredients", root_path), get(get_ingredients))
        .route(
            &format!("{}/ingredients/{{ingredient_id}}", root_path),
            get(get_ingredient)
                .put(upsert_ingredient)
                .delete(delete_ingredient),
        )
}
