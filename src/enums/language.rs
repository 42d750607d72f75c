use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Amharic,
    Tigrinya,
    Oromo,
}

impl LanguageId {
    pub const ALL: [LanguageId; 3] = [LanguageId::Amharic, LanguageId::Tigrinya, LanguageId::Oromo];

    pub const FALLBACK: LanguageId = LanguageId::Amharic;

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Amharic => "amharic",
            LanguageId::Tigrinya => "tigrinya",
            LanguageId::Oromo => "oromo",
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| QuizError::UnknownLanguage(s.to_string()))
    }
}
