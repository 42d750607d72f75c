use std::time::Duration;

use thiserror::Error;

use crate::enums::language::LanguageId;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("No active question")]
    NoActiveQuestion,

    #[error("No language selected")]
    NoLanguageSelected,

    #[error("Language set {0} has no entries")]
    EmptyLanguageSet(LanguageId),

    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

impl QuizError {
    pub fn user_message(&self) -> String {
        match self {
            QuizError::NoLanguageSelected => {
                "Please start with /start to select your language.".to_string()
            }
            QuizError::NoActiveQuestion => {
                "🤔 There is no question to answer right now.\nTap Start Learning to get one."
                    .to_string()
            }
            QuizError::Synthesis(err) => format!("❌ Audio error: {err}"),
            other => format!("❌ Error: {other}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("speech service returned {0}")]
    Status(u16),

    #[error("speech service returned no audio")]
    EmptyAudio,

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
