pub mod analytics_repository;

pub use analytics_repository::PostgresAnalyticsRepository;
