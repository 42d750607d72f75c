use std::fmt;
use std::str::FromStr;

use crate::enums::language::LanguageId;
use crate::error::QuizError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectLanguage(LanguageId),
    StartLearning,
    HearPronunciation,
    SubmitAnswer(String),
    NextQuestion,
    ViewProgress,
    MainMenu,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SelectLanguage(id) => write!(f, "select_language:{id}"),
            Action::StartLearning => f.write_str("start_learning"),
            Action::HearPronunciation => f.write_str("hear_pronunciation"),
            Action::SubmitAnswer(word) => write!(f, "submit_answer:{word}"),
            Action::NextQuestion => f.write_str("next_question"),
            Action::ViewProgress => f.write_str("view_progress"),
            Action::MainMenu => f.write_str("main_menu"),
        }
    }
}

impl FromStr for Action {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the argument is everything after the first colon, spaces included
        if let Some((verb, arg)) = s.split_once(':') {
            return match verb {
                "select_language" => Ok(Action::SelectLanguage(arg.parse()?)),
                "submit_answer" => Ok(Action::SubmitAnswer(arg.to_string())),
                _ => Err(QuizError::UnknownAction(s.to_string())),
            };
        }

        match s {
            "start_learning" => Ok(Action::StartLearning),
            "hear_pronunciation" => Ok(Action::HearPronunciation),
            "next_question" => Ok(Action::NextQuestion),
            "view_progress" => Ok(Action::ViewProgress),
            "main_menu" => Ok(Action::MainMenu),
            _ => Err(QuizError::UnknownAction(s.to_string())),
        }
    }
}
