use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::StreakThresholds;
use crate::engine::{AnswerOutcome, Question};
use crate::enums::action::Action;
use crate::enums::server_event::Button;
use crate::error::QuizError;
use crate::progress::Progress;
use crate::states::session::Session;
use crate::vocabulary::{LanguageSet, VocabularyStore};

pub const ENCOURAGEMENTS: [&str; 6] = [
    "🎉 Excellent!",
    "✨ Perfect!",
    "🌟 Amazing!",
    "🏆 Outstanding!",
    "💫 Brilliant!",
    "🎯 Spot on!",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub text: String,
    pub buttons: Vec<Button>,
}

impl Screen {
    pub fn new(text: impl Into<String>, buttons: Vec<Button>) -> Self {
        Self {
            text: text.into(),
            buttons,
        }
    }

    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.buttons.iter().map(|b| b.action.as_str())
    }
}

fn start_learning() -> Button {
    Button::new("📚 Start Learning", Action::StartLearning)
}

fn view_progress() -> Button {
    Button::new("📊 View Progress", Action::ViewProgress)
}

fn main_menu_button() -> Button {
    Button::new("🏠 Main Menu", Action::MainMenu)
}

pub fn pick_encouragement<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ENCOURAGEMENTS.choose(rng).copied().unwrap_or(ENCOURAGEMENTS[0])
}

pub fn welcome(first_name: Option<&str>, vocabulary: &VocabularyStore) -> Screen {
    let greeting = match first_name {
        Some(name) if !name.trim().is_empty() => format!("🌟 Welcome {}! 🌟", name.trim()),
        _ => "🌟 Welcome! 🌟".to_string(),
    };
    let text = format!(
        "{greeting}\n\n\
         🇪🇹➡️🇺🇸 Ethiopian-English Learning Bot\n\n\
         ✨ Features:\n\
         📚 Interactive vocabulary learning\n\
         🎵 Audio pronunciation\n\
         🏆 Progress tracking\n\n\
         Choose your native language:"
    );
    let buttons = vocabulary
        .sets()
        .map(|set| {
            Button::new(
                format!("{} {}", set.flag, set.display_name),
                Action::SelectLanguage(set.id),
            )
        })
        .collect();
    Screen::new(text, buttons)
}

pub fn language_selected(set: &LanguageSet) -> Screen {
    let text = format!(
        "🎉 Excellent choice!\n\n\
         {} You selected: {}\n\n\
         📖 Vocabulary loaded: {} words\n\
         🎯 Ready to master English!\n\n\
         Let's begin your learning journey! 🚀",
        set.flag,
        set.display_name,
        set.len()
    );
    Screen::new(text, vec![start_learning(), view_progress()])
}

pub fn question(session: &Session, question: &Question) -> Screen {
    let text = format!(
        "🎯 Quiz Time!\n\n\
         📊 Score: {}/{} | 🔥 Streak: {}\n\
         {} Category: {}\n\n\
         ❓ What is the English translation of:\n\n\
         🇪🇹 '{}' ?",
        session.score,
        session.total,
        session.streak,
        question.category.emoji(),
        question.category.title(),
        question.native_word
    );
    let mut buttons: Vec<Button> = question
        .options
        .iter()
        .map(|option| Button::new(format!("🔤 {option}"), Action::SubmitAnswer(option.clone())))
        .collect();
    buttons.push(Button::new("🔊 Hear Pronunciation", Action::HearPronunciation));
    Screen::new(text, buttons)
}

pub fn answer_result(outcome: &AnswerOutcome, streaks: &StreakThresholds, encouragement: &str) -> Screen {
    let verdict = if outcome.correct {
        let mut line = format!("{encouragement} Correct!");
        if outcome.streak >= streaks.fire {
            line.push_str(&format!("\n🔥 {} in a row! You're on fire!", outcome.streak));
        } else if outcome.streak >= streaks.warm {
            line.push_str(&format!("\n⚡ {} streak! Keep going!", outcome.streak));
        }
        line
    } else {
        format!(
            "❌ Not quite!\n\n✅ Correct answer: '{}'\n🇪🇹 Native word: '{}'",
            outcome.correct_answer, outcome.native_word
        )
    };

    let text = format!(
        "{verdict}\n\n\
         📊 Current Score: {}/{} ({:.1}%)\n\
         🎯 Keep practicing to improve!",
        outcome.score, outcome.total, outcome.accuracy_percent
    );
    let buttons = vec![
        Button::new("➡️ Next Question", Action::NextQuestion),
        Button::new("🔊 Hear Correct Answer", Action::HearPronunciation),
        view_progress(),
        main_menu_button(),
    ];
    Screen::new(text, buttons)
}

pub fn progress(progress: &Progress, set: &LanguageSet) -> Screen {
    let text = match progress.graded {
        None => "📊 Your Learning Progress\n\n\
                 🎯 No questions answered yet!\n\
                 Start learning to see your progress."
            .to_string(),
        Some(graded) => format!(
            "📊 Your Learning Progress\n\n\
             {} Language: {}\n\
             {} Level: {} {}\n\n\
             ✅ Correct Answers: {}\n\
             📝 Total Questions: {}\n\
             🎯 Accuracy: {:.1}%\n\
             🔥 Current Streak: {}\n\n\
             🎓 Keep practicing to reach Master level!",
            set.flag,
            set.display_name,
            graded.level.emoji(),
            graded.level.badge(),
            graded.level.name(),
            progress.score,
            progress.total,
            graded.accuracy_percent,
            progress.streak
        ),
    };
    let buttons = vec![
        Button::new("📚 Continue Learning", Action::StartLearning),
        main_menu_button(),
    ];
    Screen::new(text, buttons)
}

pub fn main_menu(set: &LanguageSet, session: &Session) -> Screen {
    let text = format!(
        "🏠 Main Menu\n\n\
         {} Learning: {} → English\n\
         📊 Progress: {}/{}\n\n\
         Choose an option:",
        set.flag, set.display_name, session.score, session.total
    );
    Screen::new(text, vec![start_learning(), view_progress()])
}

pub fn error(err: &QuizError) -> Screen {
    let buttons = match err {
        QuizError::NoActiveQuestion => vec![start_learning()],
        QuizError::NoLanguageSelected => Vec::new(),
        _ => vec![main_menu_button()],
    };
    Screen::new(err.user_message(), buttons)
}
