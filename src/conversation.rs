use rand::Rng;
use tracing::debug;

use crate::engine::QuizEngine;
use crate::enums::action::Action;
use crate::error::QuizError;
use crate::render::{self, Screen};
use crate::states::session::{Phase, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Screen(Screen),
    Pronounce { word: String },
}

pub fn restart(engine: &QuizEngine, session: &mut Session, first_name: Option<&str>) -> Screen {
    session.phase = Phase::Unselected;
    render::welcome(first_name, engine.vocabulary())
}

pub fn apply<R>(engine: &QuizEngine, session: &mut Session, action: &Action, rng: &mut R) -> Result<Reply, QuizError>
where
    R: Rng + ?Sized,
{
    let from = session.phase;
    let reply = match action {
        Action::SelectLanguage(id) => {
            let set = engine.vocabulary().get(*id)?;
            session.create_or_reset(*id);
            Reply::Screen(render::language_selected(set))
        }

        Action::StartLearning | Action::NextQuestion => {
            let question = engine.select_question(session, rng)?;
            session.phase = Phase::QuestionPosed;
            Reply::Screen(render::question(session, &question))
        }

        Action::SubmitAnswer(word) => {
            let outcome = engine.evaluate_answer(session, word)?;
            session.phase = Phase::AnswerEvaluated;
            let encouragement = render::pick_encouragement(rng);
            Reply::Screen(render::answer_result(&outcome, &engine.settings().streaks, encouragement))
        }

        Action::HearPronunciation => {
            let question = session
                .current_question
                .as_ref()
                .ok_or(QuizError::NoActiveQuestion)?;
            Reply::Pronounce {
                word: question.answer.clone(),
            }
        }

        Action::ViewProgress => {
            let set = engine.language_set_of(session)?;
            let progress = engine.compute_progress(session);
            session.phase = Phase::ProgressView;
            Reply::Screen(render::progress(&progress, set))
        }

        Action::MainMenu => {
            let language = session.native_language.ok_or(QuizError::NoLanguageSelected)?;
            let set = engine.vocabulary().get(language)?;
            session.phase = Phase::MainMenu;
            Reply::Screen(render::main_menu(set, session))
        }
    };

    debug!(%action, ?from, to = ?session.phase, "transition");
    Ok(reply)
}
