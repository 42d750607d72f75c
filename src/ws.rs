use std::net::SocketAddr;

use axum::{
    extract::{
        ConnectInfo, State,
        ws::{Message, Utf8Bytes, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::client_message::handle_client_message;
use crate::enums::client_message::ClientMessage;
use crate::enums::server_event::ServerEvent;
use crate::states::app_state::AppState;
use crate::states::session::UserId;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    info!(%peer, "chat client connected");
    ws.on_upgrade(move |socket| handle_socket(socket, state, peer))
}

pub fn decode_frame(msg: &Message) -> Option<ClientMessage> {
    let Message::Text(text) = msg else {
        return None;
    };
    match serde_json::from_str::<ClientMessage>(text.as_str()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(error = %err, "ignoring undecodable frame");
            None
        }
    }
}

pub fn accepts(owner: UserId, msg: &ClientMessage) -> bool {
    msg.user_id() == owner
}

// a voice header is followed by its audio
pub fn encode_event(event: &ServerEvent) -> Result<Vec<Message>, serde_json::Error> {
    let mut frames = vec![Message::Text(Utf8Bytes::from(serde_json::to_string(event)?))];
    if let Some(audio) = event.audio() {
        frames.push(Message::Binary(audio.clone()));
    }
    Ok(frames)
}

async fn handle_socket(stream: WebSocket, state: AppState, peer: SocketAddr) {
    let (mut sender, mut receiver) = stream.split();

    // the socket belongs to whichever user its first message names
    let first = loop {
        match receiver.next().await {
            Some(Ok(msg)) => {
                if let Some(parsed) = decode_frame(&msg) {
                    break parsed;
                }
            }
            _ => {
                info!(%peer, "chat client left before identifying");
                return;
            }
        }
    };
    let owner = first.user_id();
    info!(%peer, user_id = %owner, "socket bound");

    // subscribe before handling anything so no reply is missed
    let mut rx = state.subscribe(owner);

    // task: send this user's events to the client
    let mut send_task = tokio::spawn(async move {
        loop {
            let event = match rx.recv().await {
                Ok(event) => event,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(user_id = %owner, skipped, "socket lagging, events dropped");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };
            let frames = match encode_event(&event) {
                Ok(frames) => frames,
                Err(_) => continue,
            };
            for frame in frames {
                if sender.send(frame).await.is_err() {
                    return;
                }
            }
        }
    });

    // task: receive client messages
    let recv_state = state.clone();
    let mut recv_task = tokio::spawn(async move {
        handle_client_message(first, &recv_state).await;
        while let Some(Ok(msg)) = receiver.next().await {
            let Some(parsed) = decode_frame(&msg) else {
                continue;
            };
            if !accepts(owner, &parsed) {
                warn!(%owner, claimed = %parsed.user_id(), "message for another user ignored");
                continue;
            }
            handle_client_message(parsed, &recv_state).await;
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
    info!(%peer, user_id = %owner, "chat client disconnected");
}
