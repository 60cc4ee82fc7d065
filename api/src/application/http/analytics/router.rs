use super::handlers::{
    get_calories_ranking::{__path_get_calories_ranking, get_calories_ranking},
    get_category_temperature::{__path_get_category_temperature, get_category_temperature},
    get_ingredient_usage::{__path_get_ingredient_usage, get_ingredient_usage},
    get_milk_popularity::{__path_get_milk_popularity, get_milk_popularity},
    get_overview::{__path_get_overview, get_overview},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_overview,
    get_category_temperature,
    get_milk_popularity,
    get_ingredient_usage,
    get_calories_ranking
))]
pub struct AnalyticsApiDoc;

pub fn analytics_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/analytics/overview", root_path), get(get_overview))
        .route(
            &format!("{}/analytics/category-temperature", root_path),
            get(get_category_temperature),
        )
        .route(
            &format!("{}/analytics/milk-popularity", root_path),
            get(get_milk_popularity),
        )
        .route(
            &format!("{}/analytics/ingredient-usage", root_path),
            get(get_ingredient_usage),
        )
        .route(
            &format!("{}/analytics/calories-ranking", root_path),
            get(get_calories_ranking),
        )
}
