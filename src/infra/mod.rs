pub mod export;
pub mod http;
pub mod sqlite;
