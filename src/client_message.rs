use tracing::{info, warn};

use crate::conversation::{self, Reply};
use crate::enums::action::Action;
use crate::enums::client_message::ClientMessage;
use crate::enums::server_event::{DeliveryMode, ServerEvent};
use crate::error::QuizError;
use crate::pronunciation::{self, ENGLISH};
use crate::render::{self, Screen};
use crate::states::app_state::AppState;
use crate::states::session::UserId;

pub async fn handle_client_message(msg: ClientMessage, state: &AppState) {
    let user_id = msg.user_id();
    match msg {
        ClientMessage::Start { first_name, .. } => {
            let handle = state.sessions.get(user_id);
            let screen = {
                let mut session = handle.lock().await;
                conversation::restart(&state.engine, &mut session, first_name.as_deref())
            };
            state.publish(screen_event(user_id, screen, DeliveryMode::Send));
        }

        ClientMessage::Action { action, .. } => match action.parse::<Action>() {
            Ok(action) => handle_action(user_id, action, state).await,
            Err(err) => {
                warn!(%user_id, raw = %action, error = %err, "malformed action");
                state.publish(screen_event(user_id, render::error(&err), DeliveryMode::Edit));
            }
        },
    }
}

async fn handle_action(user_id: UserId, action: Action, state: &AppState) {
    let handle = state.sessions.get(user_id);
    let reply = {
        // held for the whole transition so one user's events never interleave
        let mut session = handle.lock().await;
        conversation::apply(&state.engine, &mut session, &action, &mut rand::thread_rng())
    };

    match reply {
        Ok(Reply::Screen(screen)) => {
            if let Action::SelectLanguage(language) = &action {
                info!(%user_id, %language, "language selected");
            }
            state.publish(screen_event(user_id, screen, DeliveryMode::Edit));
        }
        Ok(Reply::Pronounce { word }) => {
            state.publish(ServerEvent::Notice {
                user_id,
                text: "🎵 Generating pronunciation...".to_string(),
            });
            let state = state.clone();
            tokio::spawn(async move { send_pronunciation(user_id, word, &state).await });
        }
        Err(err) => {
            warn!(%user_id, %action, error = %err, "action failed");
            state.publish(failure_event(user_id, &action, &err));
        }
    }
}

async fn send_pronunciation(user_id: UserId, word: String, state: &AppState) {
    let result = pronunciation::synthesize_with_timeout(
        state.synthesizer.as_ref(),
        &word,
        ENGLISH,
        state.tts_timeout,
    )
    .await;

    match result {
        Ok(audio) => state.publish(ServerEvent::Voice {
            user_id,
            caption: format!("🔊 Pronunciation: '{word}'"),
            mime: state.synthesizer.mime_type().to_string(),
            bytes: audio.len(),
            audio,
        }),
        Err(err) => {
            warn!(%user_id, %word, error = %err, "pronunciation failed");
            let err = QuizError::from(err);
            state.publish(ServerEvent::Notice {
                user_id,
                text: err.user_message(),
            });
        }
    }
}

// pronunciation problems are toasts, everything else replaces the screen
fn failure_event(user_id: UserId, action: &Action, err: &QuizError) -> ServerEvent {
    match (action, err) {
        (Action::HearPronunciation, QuizError::NoActiveQuestion) => ServerEvent::Notice {
            user_id,
            text: "No word to pronounce!".to_string(),
        },
        (Action::HearPronunciation, err) => ServerEvent::Notice {
            user_id,
            text: err.user_message(),
        },
        (_, err) => screen_event(user_id, render::error(err), DeliveryMode::Edit),
    }
}

fn screen_event(user_id: UserId, screen: Screen, mode: DeliveryMode) -> ServerEvent {
    ServerEvent::Screen {
        user_id,
        text: screen.text,
        buttons: screen.buttons,
        mode,
    }
}
