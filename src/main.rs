use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use ethio_vocab_bot::{
    AppState, Config, build_app, engine::QuizEngine, pronunciation::GoogleTranslateTts,
    vocabulary::VocabularyStore,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ethio_vocab_bot=info")),
        )
        .init();

    let config = Config::from_env()?;

    let engine = QuizEngine::new(Arc::new(VocabularyStore::builtin()), config.quiz.clone());
    let synthesizer = Arc::new(GoogleTranslateTts::new(config.tts_endpoint.clone()));
    let state = AppState::new(engine, synthesizer, config.tts_timeout);

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
