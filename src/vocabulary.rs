use std::collections::HashMap;

use crate::enums::category::Category;
use crate::enums::language::LanguageId;
use crate::error::QuizError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub english: String,
    pub native: String,
    pub category: Category,
}

impl VocabularyEntry {
    pub fn new(english: impl Into<String>, native: impl Into<String>, category: Category) -> Self {
        Self {
            english: english.into(),
            native: native.into(),
            category,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LanguageSet {
    pub id: LanguageId,
    pub display_name: String,
    pub flag: String,
    entries: Vec<VocabularyEntry>,
}

impl LanguageSet {
    pub fn new(
        id: LanguageId,
        display_name: impl Into<String>,
        flag: impl Into<String>,
        entries: Vec<VocabularyEntry>,
    ) -> Result<Self, QuizError> {
        if entries.is_empty() {
            return Err(QuizError::EmptyLanguageSet(id));
        }
        Ok(Self {
            id,
            display_name: display_name.into(),
            flag: flag.into(),
            entries,
        })
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct VocabularyStore {
    sets: HashMap<LanguageId, LanguageSet>,
}

impl VocabularyStore {
    pub fn new(sets: impl IntoIterator<Item = LanguageSet>) -> Self {
        Self {
            sets: sets.into_iter().map(|set| (set.id, set)).collect(),
        }
    }

    pub fn builtin() -> Self {
        use Category::*;

        let table: [(LanguageId, &str, [(&str, &str, Category); 15]); 3] = [
            (
                LanguageId::Amharic,
                "አማርኛ (Amharic)",
                [
                    ("hello", "ሰላም", Greeting),
                    ("goodbye", "ደህና ሁን", Greeting),
                    ("thank you", "አመሰግናለሁ", Courtesy),
                    ("water", "ውሃ", Daily),
                    ("food", "ምግብ", Daily),
                    ("house", "ቤት", Daily),
                    ("family", "ቤተሰብ", Family),
                    ("friend", "ጓደኛ", Social),
                    ("work", "ስራ", Daily),
                    ("money", "ገንዘብ", Daily),
                    ("school", "ትምህርት ቤት", Education),
                    ("book", "መጽሐፍ", Education),
                    ("mother", "እናት", Family),
                    ("father", "አባት", Family),
                    ("child", "ልጅ", Family),
                ],
            ),
            (
                LanguageId::Tigrinya,
                "ትግርኛ (Tigrinya)",
                [
                    ("hello", "ሰላም", Greeting),
                    ("goodbye", "ሰላም ኩን", Greeting),
                    ("thank you", "የቐንየለይ", Courtesy),
                    ("water", "ማይ", Daily),
                    ("food", "መግቢ", Daily),
                    ("house", "ቤት", Daily),
                    ("family", "ቤተሰብ", Family),
                    ("friend", "ዓርኪ", Social),
                    ("work", "ስራሕ", Daily),
                    ("money", "ገንዘብ", Daily),
                    ("school", "ቤት ትምህርቲ", Education),
                    ("book", "መጽሓፍ", Education),
                    ("mother", "ኣደ", Family),
                    ("father", "ኣቦ", Family),
                    ("child", "ቆልዓ", Family),
                ],
            ),
            (
                LanguageId::Oromo,
                "Oromiffa (Oromo)",
                [
                    ("hello", "akkam", Greeting),
                    ("goodbye", "nagaatti", Greeting),
                    ("thank you", "galatoomaa", Courtesy),
                    ("water", "bishaan", Daily),
                    ("food", "nyaata", Daily),
                    ("house", "mana", Daily),
                    ("family", "maatii", Family),
                    ("friend", "hiriyaa", Social),
                    ("work", "hojii", Daily),
                    ("money", "maallaqa", Daily),
                    ("school", "mana barumsaa", Education),
                    ("book", "kitaaba", Education),
                    ("mother", "haadha", Family),
                    ("father", "abbaa", Family),
                    ("child", "ijoollee", Family),
                ],
            ),
        ];

        let sets = table.into_iter().map(|(id, name, words)| LanguageSet {
            id,
            display_name: name.to_string(),
            flag: "🇪🇹".to_string(),
            entries: words
                .into_iter()
                .map(|(english, native, category)| VocabularyEntry::new(english, native, category))
                .collect(),
        });
        Self::new(sets)
    }

    pub fn get(&self, id: LanguageId) -> Result<&LanguageSet, QuizError> {
        self.sets
            .get(&id)
            .ok_or_else(|| QuizError::UnknownLanguage(id.to_string()))
    }

    pub fn sets(&self) -> impl Iterator<Item = &LanguageSet> {
        LanguageId::ALL.into_iter().filter_map(|id| self.sets.get(&id))
    }
}

impl Default for VocabularyStore {
    fn default() -> Self {
        Self::builtin()
    }
}
