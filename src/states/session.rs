use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::category::Category;
use crate::enums::language::LanguageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Unselected,
    LanguageChosen,
    QuestionPosed,
    AnswerEvaluated,
    ProgressView,
    MainMenu,
}

// kept after grading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentQuestion {
    pub answer: String,
    pub native_word: String,
    pub category: Category,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub native_language: Option<LanguageId>,
    pub score: u32,
    pub total: u32,
    pub streak: u32,
    pub current_question: Option<CurrentQuestion>,
    pub phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_or_reset(&mut self, language: LanguageId) {
        *self = Self {
            native_language: Some(language),
            phase: Phase::LanguageChosen,
            ..Self::default()
        };
    }

    pub(crate) fn record_answer(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.score += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
    }
}
