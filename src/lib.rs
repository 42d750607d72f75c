pub mod app;
pub mod client_message;
pub mod config;
pub mod conversation;
pub mod engine;
pub mod enums;
pub mod error;
pub mod progress;
pub mod pronunciation;
pub mod render;
pub mod states;
pub mod vocabulary;
pub mod ws;

pub use app::build_app;
pub use config::Config;
pub use states::app_state::AppState;
