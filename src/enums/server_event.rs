use axum::body::Bytes;
use serde::Serialize;

use crate::states::session::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: String,
    pub action: String,
}

impl Button {
    pub fn new(label: impl Into<String>, action: impl ToString) -> Self {
        Self {
            label: label.into(),
            action: action.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    Send,
    Edit,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    #[serde(rename = "screen")]
    Screen {
        user_id: UserId,
        text: String,
        buttons: Vec<Button>,
        mode: DeliveryMode,
    },

    #[serde(rename = "notice")]
    Notice { user_id: UserId, text: String },

    #[serde(rename = "voice")]
    Voice {
        user_id: UserId,
        caption: String,
        mime: String,
        bytes: usize,
        #[serde(skip)]
        audio: Bytes,
    },
}

impl ServerEvent {
    pub fn user_id(&self) -> UserId {
        match self {
            ServerEvent::Screen { user_id, .. }
            | ServerEvent::Notice { user_id, .. }
            | ServerEvent::Voice { user_id, .. } => *user_id,
        }
    }

    pub fn audio(&self) -> Option<&Bytes> {
        match self {
            ServerEvent::Voice { audio, .. } => Some(audio),
            _ => None,
        }
    }
}
