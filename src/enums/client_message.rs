use serde::Deserialize;

use crate::states::session::UserId;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "start")]
    Start {
        user_id: UserId,
        #[serde(default)]
        first_name: Option<String>,
    },

    #[serde(rename = "action")]
    Action { user_id: UserId, action: String },
}

impl ClientMessage {
    pub fn user_id(&self) -> UserId {
        match self {
            ClientMessage::Start { user_id, .. } | ClientMessage::Action { user_id, .. } => *user_id,
        }
    }
}
