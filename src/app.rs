use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::states::app_state::AppState;
use crate::ws::ws_handler;

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest("/ws", Router::new().route("/quiz", get(ws_handler)))
        .with_state(state)
}

async fn healthz(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "sessions": state.sessions.len(),
        "languages": state.engine.vocabulary().sets().map(|s| s.id).collect::<Vec<_>>(),
    }))
}
