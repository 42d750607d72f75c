use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Greeting,
    Courtesy,
    Daily,
    Family,
    Social,
    Education,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Category::Greeting => "Greeting",
            Category::Courtesy => "Courtesy",
            Category::Daily => "Daily",
            Category::Family => "Family",
            Category::Social => "Social",
            Category::Education => "Education",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Greeting => "👋",
            Category::Courtesy => "🙏",
            Category::Daily => "🏠",
            Category::Family => "👨‍👩‍👧‍👦",
            Category::Social => "👥",
            Category::Education => "🎓",
        }
    }
}
