pub mod app_state;
pub mod fetch_channel;
