pub mod app_state;
pub mod session;
pub mod session_store;
