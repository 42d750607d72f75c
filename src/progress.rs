use crate::states::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Master,
}

impl Level {
    pub fn name(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Expert => "Expert",
            Level::Master => "Master",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Level::Beginner => "📚",
            Level::Intermediate => "🥉",
            Level::Advanced => "🥈",
            Level::Expert => "🥇",
            Level::Master => "🏆",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Level::Beginner => "🌱",
            Level::Intermediate => "💫",
            Level::Advanced => "✨",
            Level::Expert => "⭐",
            Level::Master => "🌟",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelThresholds {
    pub master: f64,
    pub expert: f64,
    pub advanced: f64,
    pub intermediate: f64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            master: 90.0,
            expert: 75.0,
            advanced: 60.0,
            intermediate: 40.0,
        }
    }
}

impl LevelThresholds {
    pub fn level_for(&self, accuracy: f64) -> Level {
        if accuracy >= self.master {
            Level::Master
        } else if accuracy >= self.expert {
            Level::Expert
        } else if accuracy >= self.advanced {
            Level::Advanced
        } else if accuracy >= self.intermediate {
            Level::Intermediate
        } else {
            Level::Beginner
        }
    }
}

pub fn accuracy_percent(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(score) * 100.0 / f64::from(total)
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Graded {
    pub accuracy_percent: f64,
    pub level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub score: u32,
    pub total: u32,
    pub streak: u32,
    // none until something was answered
    pub graded: Option<Graded>,
}

impl Progress {
    pub fn is_unanswered(&self) -> bool {
        self.graded.is_none()
    }
}

pub fn compute_progress(session: &Session, thresholds: &LevelThresholds) -> Progress {
    let graded = (session.total > 0).then(|| {
        let accuracy = accuracy_percent(session.score, session.total);
        Graded {
            accuracy_percent: accuracy,
            level: thresholds.level_for(accuracy),
        }
    });

    Progress {
        score: session.score,
        total: session.total,
        streak: session.streak,
        graded,
    }
}
