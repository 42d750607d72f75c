pub mod action;
pub mod category;
pub mod client_message;
pub mod language;
pub mod server_event;
