pub mod get_calories_ranking;
pub mod get_category_temperature;
pub mod get_ingredient_usage;
pub mod get_milk_popularity;
pub mod get_overview;
