use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::QuizSettings;
use crate::enums::category::Category;
use crate::enums::language::LanguageId;
use crate::error::QuizError;
use crate::progress::{self, Progress};
use crate::states::session::{CurrentQuestion, Session};
use crate::vocabulary::{LanguageSet, VocabularyStore};

pub const DISTRACTORS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub native_word: String,
    pub category: Category,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    pub native_word: String,
    pub score: u32,
    pub total: u32,
    pub streak: u32,
    pub accuracy_percent: f64,
}

// a pool smaller than `k` is returned whole
pub fn sample_distinct<'a, T, R>(pool: &'a [T], k: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    pool.choose_multiple(rng, k).collect()
}

#[derive(Debug, Clone)]
pub struct QuizEngine {
    vocabulary: Arc<VocabularyStore>,
    settings: QuizSettings,
}

impl QuizEngine {
    pub fn new(vocabulary: Arc<VocabularyStore>, settings: QuizSettings) -> Self {
        Self {
            vocabulary,
            settings,
        }
    }

    pub fn vocabulary(&self) -> &VocabularyStore {
        &self.vocabulary
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn language_of(&self, session: &Session) -> LanguageId {
        session
            .native_language
            .unwrap_or(self.settings.fallback_language)
    }

    pub fn language_set_of(&self, session: &Session) -> Result<&LanguageSet, QuizError> {
        self.vocabulary.get(self.language_of(session))
    }

    pub fn select_question<R>(&self, session: &mut Session, rng: &mut R) -> Result<Question, QuizError>
    where
        R: Rng + ?Sized,
    {
        let set = self.language_set_of(session)?;
        let correct = set
            .entries()
            .choose(rng)
            .ok_or(QuizError::EmptyLanguageSet(set.id))?;

        // distinct english words other than the answer
        let mut seen = HashSet::from([correct.english.as_str()]);
        let pool: Vec<&str> = set
            .entries()
            .iter()
            .map(|entry| entry.english.as_str())
            .filter(|word| seen.insert(*word))
            .collect();

        let mut options: Vec<String> = std::iter::once(correct.english.clone())
            .chain(
                sample_distinct(&pool, DISTRACTORS, rng)
                    .into_iter()
                    .map(|word| word.to_string()),
            )
            .collect();
        options.shuffle(rng);

        session.current_question = Some(CurrentQuestion {
            answer: correct.english.clone(),
            native_word: correct.native.clone(),
            category: correct.category,
        });

        Ok(Question {
            native_word: correct.native.clone(),
            category: correct.category,
            options,
        })
    }

    pub fn evaluate_answer(&self, session: &mut Session, submitted: &str) -> Result<AnswerOutcome, QuizError> {
        let question = session
            .current_question
            .clone()
            .ok_or(QuizError::NoActiveQuestion)?;

        let correct = submitted == question.answer;
        session.record_answer(correct);

        Ok(AnswerOutcome {
            correct,
            correct_answer: question.answer,
            native_word: question.native_word,
            score: session.score,
            total: session.total,
            streak: session.streak,
            accuracy_percent: progress::round_one_decimal(progress::accuracy_percent(
                session.score,
                session.total,
            )),
        })
    }

    pub fn compute_progress(&self, session: &Session) -> Progress {
        progress::compute_progress(session, &self.settings.levels)
    }
}
