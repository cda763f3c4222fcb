pub mod customer_mapping;
pub mod dashboard;
pub mod officer_mapping;
