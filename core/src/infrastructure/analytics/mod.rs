pub mod repositories;

pub use repositories::PostgresAnalyticsRepository;
