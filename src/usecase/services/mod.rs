pub mod customer_service;
pub mod list_engine;
pub mod pagination;
pub mod preference_service;
pub mod stats_service;
