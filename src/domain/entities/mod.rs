pub mod criteria;
pub mod customer;
pub mod drilldown;
pub mod lenient;
pub mod reference;
pub mod request;
pub mod stats;
