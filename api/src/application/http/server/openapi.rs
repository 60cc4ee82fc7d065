use crate::application::http::{
    analytics::router::AnalyticsApiDoc, health::HealthApiDoc, ingredient::router::IngredientApiDoc,
    inventory::router::InventoryApiDoc, recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CafeCrunch API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/inventory", api = InventoryApiDoc),
        (path = "/analytics", api = AnalyticsApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
