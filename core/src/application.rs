use crate::domain::common::{CafeCrunchConfig, services::Service};
use crate::infrastructure::{
    analytics::PostgresAnalyticsRepository,
    db::postgres::{Postgres, PostgresConfig},
    health::PostgresHealthCheckRepository,
    ingredient::PostgresIngredientRepository,
    inventory::PostgresInventoryRepository,
    recipe::PostgresRecipeRepository,
};

pub type CafeCrunchService = Service<
    PostgresIngredientRepository,
    PostgresRecipeRepository,
    PostgresInventoryRepository,
    PostgresAnalyticsRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: CafeCrunchConfig) -> Result<CafeCrunchService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    Ok(Service::new(
        PostgresIngredientRepository::new(postgres.get_db()),
        PostgresRecipeRepository::new(postgres.get_db()),
        PostgresInventoryRepository::new(postgres.get_db()),
        PostgresAnalyticsRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
    ))
}
