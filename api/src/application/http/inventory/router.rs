use super::handlers::{
    get_inventory::{__path_get_inventory, get_inventory},
    get_inventory_item::{__path_get_inventory_item, get_inventory_item},
    upsert_inventory_item::{__path_upsert_inventory_item, upsert_inventory_item},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_inventory, get_inventory_item, upsert_inventory_item))]
pub struct InventoryApiDoc;

pub fn inventory_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/inventory", root_path), get(get_inventory))
        .route(
            &format!("{}/inventory/{{ingredient_id}}", root_path),
            get(get_inventory_item).put(upsert_inventory_item),
        )
}
