//! End-to-end conversation tests through the dispatcher and event channel.
//!
//! Run with: `cargo test --test conversation_flow`

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Bytes;
use tokio::sync::broadcast::Receiver;

use ethio_vocab_bot::AppState;
use ethio_vocab_bot::client_message::handle_client_message;
use ethio_vocab_bot::config::QuizSettings;
use ethio_vocab_bot::engine::QuizEngine;
use ethio_vocab_bot::enums::client_message::ClientMessage;
use ethio_vocab_bot::enums::language::LanguageId;
use ethio_vocab_bot::enums::server_event::{Button, DeliveryMode, ServerEvent};
use ethio_vocab_bot::error::SynthesisError;
use ethio_vocab_bot::pronunciation::Synthesizer;
use ethio_vocab_bot::states::session::{Phase, UserId};
use ethio_vocab_bot::vocabulary::VocabularyStore;

// =============================================================================
// HELPERS
// =============================================================================

struct FakeSpeech;

#[async_trait]
impl Synthesizer for FakeSpeech {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Bytes, SynthesisError> {
        Ok(Bytes::from(format!("{language_code}|{text}")))
    }
}

struct BrokenSpeech;

#[async_trait]
impl Synthesizer for BrokenSpeech {
    async fn synthesize(&self, _text: &str, _language_code: &str) -> Result<Bytes, SynthesisError> {
        Err(SynthesisError::Status(503))
    }
}

struct SilentSpeech;

#[async_trait]
impl Synthesizer for SilentSpeech {
    async fn synthesize(&self, _text: &str, _language_code: &str) -> Result<Bytes, SynthesisError> {
        tokio::time::sleep(Duration::from_secs(600)).await;
        Ok(Bytes::new())
    }
}

fn state_with(synthesizer: Arc<dyn Synthesizer>) -> AppState {
    let engine = QuizEngine::new(Arc::new(VocabularyStore::builtin()), QuizSettings::default());
    AppState::new(engine, synthesizer, Duration::from_secs(2))
}

fn state() -> AppState {
    state_with(Arc::new(FakeSpeech))
}

fn start(user: i64) -> ClientMessage {
    ClientMessage::Start {
        user_id: UserId(user),
        first_name: Some("Liya".to_string()),
    }
}

fn action(user: i64, action: &str) -> ClientMessage {
    ClientMessage::Action {
        user_id: UserId(user),
        action: action.to_string(),
    }
}

async fn next_for(rx: &mut Receiver<ServerEvent>, user: i64) -> ServerEvent {
    loop {
        let event = rx.recv().await.expect("event channel closed");
        if event.user_id() == UserId(user) {
            return event;
        }
    }
}

async fn screen_for(rx: &mut Receiver<ServerEvent>, user: i64) -> (String, Vec<Button>, DeliveryMode) {
    match next_for(rx, user).await {
        ServerEvent::Screen {
            text, buttons, mode, ..
        } => (text, buttons, mode),
        other => panic!("expected a screen, got {other:?}"),
    }
}

async fn notice_for(rx: &mut Receiver<ServerEvent>, user: i64) -> String {
    match next_for(rx, user).await {
        ServerEvent::Notice { text, .. } => text,
        other => panic!("expected a notice, got {other:?}"),
    }
}

async fn current_answer(state: &AppState, user: i64) -> String {
    let handle = state.sessions.get(UserId(user));
    let session = handle.lock().await;
    session
        .current_question
        .as_ref()
        .expect("question posed")
        .answer
        .clone()
}

async fn counters(state: &AppState, user: i64) -> (u32, u32, u32) {
    let handle = state.sessions.get(UserId(user));
    let session = handle.lock().await;
    (session.score, session.total, session.streak)
}

// =============================================================================
// LANGUAGE SELECTION
// =============================================================================

#[tokio::test]
async fn start_sends_language_picker() {
    let state = state();
    let mut rx = state.subscribe(UserId(1));

    handle_client_message(start(1), &state).await;
    let (text, buttons, mode) = screen_for(&mut rx, 1).await;

    assert!(text.contains("Welcome Liya!"));
    assert_eq!(mode, DeliveryMode::Send);
    let actions: Vec<_> = buttons.iter().map(|b| b.action.as_str()).collect();
    assert_eq!(
        actions,
        vec!["select_language:amharic", "select_language:tigrinya", "select_language:oromo"]
    );
}

#[tokio::test]
async fn selecting_a_language_resets_prior_progress() {
    let state = state();
    let mut rx = state.subscribe(UserId(1));

    handle_client_message(action(1, "select_language:oromo"), &state).await;
    screen_for(&mut rx, 1).await;
    for _ in 0..3 {
        handle_client_message(action(1, "start_learning"), &state).await;
        screen_for(&mut rx, 1).await;
        let answer = current_answer(&state, 1).await;
        handle_client_message(action(1, &format!("submit_answer:{answer}")), &state).await;
        screen_for(&mut rx, 1).await;
    }
    assert_eq!(counters(&state, 1).await, (3, 3, 3));

    handle_client_message(action(1, "select_language:amharic"), &state).await;
    let (text, _, mode) = screen_for(&mut rx, 1).await;
    assert!(text.contains("You selected: አማርኛ (Amharic)"));
    assert_eq!(mode, DeliveryMode::Edit);

    assert_eq!(counters(&state, 1).await, (0, 0, 0));
    let handle = state.sessions.get(UserId(1));
    let session = handle.lock().await;
    assert_eq!(session.native_language, Some(LanguageId::Amharic));
    assert!(session.current_question.is_none());
    assert_eq!(session.phase, Phase::LanguageChosen);
}

// =============================================================================
// QUIZ ROUNDS
// =============================================================================

#[tokio::test]
async fn question_round_trip() {
    let state = state();
    let mut rx = state.subscribe(UserId(2));

    handle_client_message(action(2, "select_language:tigrinya"), &state).await;
    screen_for(&mut rx, 2).await;

    handle_client_message(action(2, "start_learning"), &state).await;
    let (text, buttons, _) = screen_for(&mut rx, 2).await;
    assert!(text.contains("🎯 Quiz Time!"));
    assert!(text.contains("📊 Score: 0/0 | 🔥 Streak: 0"));
    assert_eq!(buttons.len(), 4);
    assert_eq!(buttons[3].action, "hear_pronunciation");

    let answer = current_answer(&state, 2).await;
    let answer_action = format!("submit_answer:{answer}");
    assert_eq!(buttons.iter().filter(|b| b.action == answer_action).count(), 1);

    handle_client_message(action(2, &answer_action), &state).await;
    let (text, buttons, _) = screen_for(&mut rx, 2).await;
    assert!(text.contains("Correct!"));
    assert!(text.contains("📊 Current Score: 1/1 (100.0%)"));
    assert_eq!(buttons[0].action, "next_question");

    assert!(buttons.iter().any(|b| b.action == "view_progress"));
    handle_client_message(action(2, "view_progress"), &state).await;
    let (text, _, _) = screen_for(&mut rx, 2).await;
    assert!(text.contains("🏆 Master"));
}

#[tokio::test]
async fn wrong_answer_breaks_the_streak() {
    let state = state();
    let mut rx = state.subscribe(UserId(3));

    handle_client_message(action(3, "select_language:amharic"), &state).await;
    screen_for(&mut rx, 3).await;
    for _ in 0..2 {
        handle_client_message(action(3, "next_question"), &state).await;
        screen_for(&mut rx, 3).await;
        let answer = current_answer(&state, 3).await;
        handle_client_message(action(3, &format!("submit_answer:{answer}")), &state).await;
        screen_for(&mut rx, 3).await;
    }
    assert_eq!(counters(&state, 3).await, (2, 2, 2));

    handle_client_message(action(3, "next_question"), &state).await;
    screen_for(&mut rx, 3).await;
    let answer = current_answer(&state, 3).await;
    handle_client_message(action(3, &format!("submit_answer:{}", answer.to_uppercase())), &state).await;
    let (text, _, _) = screen_for(&mut rx, 3).await;

    assert!(text.contains("❌ Not quite!"));
    assert!(text.contains(&format!("✅ Correct answer: '{answer}'")));
    assert!(text.contains("2/3 (66.7%)"));
    assert_eq!(counters(&state, 3).await, (2, 3, 0));
}

#[tokio::test]
async fn answer_without_question_is_reported() {
    let state = state();
    let mut rx = state.subscribe(UserId(4));

    handle_client_message(action(4, "select_language:oromo"), &state).await;
    screen_for(&mut rx, 4).await;
    handle_client_message(action(4, "submit_answer:water"), &state).await;
    let (text, buttons, _) = screen_for(&mut rx, 4).await;

    assert!(text.contains("no question to answer"));
    assert_eq!(buttons[0].action, "start_learning");
    assert_eq!(counters(&state, 4).await, (0, 0, 0));
}

// =============================================================================
// PROGRESS AND MENU
// =============================================================================

#[tokio::test]
async fn progress_before_any_answer_has_no_level() {
    let state = state();
    let mut rx = state.subscribe(UserId(5));

    handle_client_message(action(5, "view_progress"), &state).await;
    let (text, buttons, _) = screen_for(&mut rx, 5).await;
    assert!(text.contains("No questions answered yet!"));
    assert!(!text.contains("Level"));
    assert_eq!(buttons[0].action, "start_learning");
}

#[tokio::test]
async fn main_menu_before_language_asks_for_start() {
    let state = state();
    let mut rx = state.subscribe(UserId(6));

    handle_client_message(action(6, "main_menu"), &state).await;
    let (text, buttons, _) = screen_for(&mut rx, 6).await;
    assert_eq!(text, "Please start with /start to select your language.");
    assert!(buttons.is_empty());
}

#[tokio::test]
async fn main_menu_shows_language_and_score() {
    let state = state();
    let mut rx = state.subscribe(UserId(7));

    handle_client_message(action(7, "select_language:oromo"), &state).await;
    screen_for(&mut rx, 7).await;
    handle_client_message(action(7, "main_menu"), &state).await;
    let (text, _, _) = screen_for(&mut rx, 7).await;
    assert!(text.contains("Learning: Oromiffa (Oromo) → English"));
    assert!(text.contains("📊 Progress: 0/0"));
}

#[tokio::test]
async fn malformed_action_renders_error() {
    let state = state();
    let mut rx = state.subscribe(UserId(8));

    handle_client_message(action(8, "select_language:klingon"), &state).await;
    let (text, _, _) = screen_for(&mut rx, 8).await;
    assert!(text.starts_with("❌ Error: Unknown language: klingon"));

    handle_client_message(action(8, "self_destruct"), &state).await;
    let (text, _, _) = screen_for(&mut rx, 8).await;
    assert!(text.contains("Unknown action"));
}

// =============================================================================
// PRONUNCIATION
// =============================================================================

#[tokio::test]
async fn pronunciation_without_question_is_a_notice() {
    let state = state();
    let mut rx = state.subscribe(UserId(9));

    handle_client_message(action(9, "hear_pronunciation"), &state).await;
    assert_eq!(notice_for(&mut rx, 9).await, "No word to pronounce!");
}

#[tokio::test]
async fn pronunciation_sends_voice_for_the_answer() {
    let state = state();
    let mut rx = state.subscribe(UserId(10));

    handle_client_message(action(10, "start_learning"), &state).await;
    screen_for(&mut rx, 10).await;
    let answer = current_answer(&state, 10).await;
    let before = counters(&state, 10).await;

    handle_client_message(action(10, "hear_pronunciation"), &state).await;
    assert_eq!(notice_for(&mut rx, 10).await, "🎵 Generating pronunciation...");

    match next_for(&mut rx, 10).await {
        ServerEvent::Voice {
            caption,
            mime,
            bytes,
            audio,
            ..
        } => {
            assert_eq!(caption, format!("🔊 Pronunciation: '{answer}'"));
            assert_eq!(mime, "audio/mpeg");
            assert_eq!(&audio[..], format!("en|{answer}").as_bytes());
            assert_eq!(bytes, audio.len());
        }
        other => panic!("expected voice, got {other:?}"),
    }
    assert_eq!(counters(&state, 10).await, before);
}

#[tokio::test]
async fn synthesis_failure_is_recoverable() {
    let state = state_with(Arc::new(BrokenSpeech));
    let mut rx = state.subscribe(UserId(11));

    handle_client_message(action(11, "start_learning"), &state).await;
    screen_for(&mut rx, 11).await;
    handle_client_message(action(11, "hear_pronunciation"), &state).await;
    notice_for(&mut rx, 11).await;
    let text = notice_for(&mut rx, 11).await;
    assert!(text.starts_with("❌ Audio error"));
    assert!(text.contains("503"));

    // the conversation carries on
    handle_client_message(action(11, "next_question"), &state).await;
    let (text, _, _) = screen_for(&mut rx, 11).await;
    assert!(text.contains("Quiz Time!"));
}

#[tokio::test(start_paused = true)]
async fn synthesis_timeout_is_reported() {
    let state = state_with(Arc::new(SilentSpeech));
    let mut rx = state.subscribe(UserId(12));

    handle_client_message(action(12, "start_learning"), &state).await;
    screen_for(&mut rx, 12).await;
    handle_client_message(action(12, "hear_pronunciation"), &state).await;
    notice_for(&mut rx, 12).await;
    let text = notice_for(&mut rx, 12).await;
    assert!(text.contains("timed out"));
}

// =============================================================================
// ISOLATION AND ORDERING
// =============================================================================

#[tokio::test]
async fn one_users_failure_leaves_others_untouched() {
    let state = state();
    let mut rx = state.subscribe(UserId(20));

    handle_client_message(action(20, "select_language:amharic"), &state).await;
    screen_for(&mut rx, 20).await;
    handle_client_message(action(20, "start_learning"), &state).await;
    screen_for(&mut rx, 20).await;
    let answer = current_answer(&state, 20).await;

    handle_client_message(action(21, "submit_answer:water"), &state).await;
    handle_client_message(action(21, "bogus"), &state).await;

    handle_client_message(action(20, &format!("submit_answer:{answer}")), &state).await;
    let (text, _, _) = screen_for(&mut rx, 20).await;
    assert!(text.contains("Correct!"));
    assert_eq!(counters(&state, 20).await, (1, 1, 1));
    assert_eq!(counters(&state, 21).await, (0, 0, 0));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_events_for_one_user_are_serialized() {
    let state = state();

    handle_client_message(action(30, "start_learning"), &state).await;
    let answer = current_answer(&state, 30).await;

    let mut tasks = Vec::new();
    for _ in 0..50 {
        let state = state.clone();
        let submit = action(30, &format!("submit_answer:{answer}"));
        tasks.push(tokio::spawn(async move {
            handle_client_message(submit, &state).await;
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(counters(&state, 30).await, (50, 50, 50));
}

#[tokio::test]
async fn another_users_flood_does_not_drop_my_screen() {
    let state = state();
    let mut mine = state.subscribe(UserId(41));
    let _theirs = state.subscribe(UserId(40));

    handle_client_message(action(41, "start_learning"), &state).await;
    for _ in 0..300 {
        handle_client_message(action(40, "view_progress"), &state).await;
    }

    let (text, _, _) = screen_for(&mut mine, 41).await;
    assert!(text.contains("Quiz Time!"));
    assert!(mine.try_recv().is_err());
}
