use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::trace;

use crate::engine::QuizEngine;
use crate::enums::server_event::ServerEvent;
use crate::pronunciation::Synthesizer;
use crate::states::session::UserId;
use crate::states::session_store::SessionStore;

// per user, so only a user's own traffic can make their socket lag
pub const EVENT_CAPACITY: usize = 256;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QuizEngine>,
    pub sessions: Arc<SessionStore>,
    pub synthesizer: Arc<dyn Synthesizer>,
    pub tts_timeout: Duration,
    channels: Arc<Mutex<HashMap<UserId, broadcast::Sender<ServerEvent>>>>,
}

impl AppState {
    pub fn new(engine: QuizEngine, synthesizer: Arc<dyn Synthesizer>, tts_timeout: Duration) -> Self {
        Self {
            engine: Arc::new(engine),
            sessions: Arc::new(SessionStore::new()),
            synthesizer,
            tts_timeout,
            channels: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn subscribe(&self, user_id: UserId) -> broadcast::Receiver<ServerEvent> {
        let mut channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
        channels
            .entry(user_id)
            .or_insert_with(|| broadcast::channel(EVENT_CAPACITY).0)
            .subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        let user_id = event.user_id();
        let channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
        let delivered = channels
            .get(&user_id)
            .is_some_and(|tx| tx.send(event).is_ok());
        if !delivered {
            trace!(%user_id, "event dropped, user not connected");
        }
    }
}
