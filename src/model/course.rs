use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of characters shown in a module preview before the ellipsis
pub const MODULE_PREVIEW_LEN: usize = 10;

/// Difficulty level of a course
///
/// The backend stores the level as a plain string, only these three values are accepted
/// when decoding a course.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Every level in the order shown by difficulty selectors
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("Unknown difficulty level: {}", s))
    }
}

/// A single module of a course
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Only present when the backend returns module identifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
    #[serde(default)]
    pub video: Option<String>,
}

impl Module {
    /// Short preview shown in module lists
    ///
    /// Uses the description when it is not blank, otherwise falls back to the content.
    pub fn preview(&self) -> String {
        let source = match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description,
            _ => self.content.as_str(),
        };

        let shortened: String = source.chars().take(MODULE_PREVIEW_LEN).collect();
        format!("{}...", shortened)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

/// Unsaved course from the create form, the backend assigns the id
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub image: Option<String>,
    pub modules: Vec<Module>,
}

/// Module form contents before they are attached to a course
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModuleDraft {
    pub title: String,
    pub content: String,
    pub video: String,
}

impl From<ModuleDraft> for Module {
    fn from(draft: ModuleDraft) -> Self {
        let video = match draft.video.trim() {
            "" => None,
            url => Some(url.to_string()),
        };

        Module {
            id: None,
            title: draft.title,
            description: None,
            content: draft.content,
            video,
        }
    }
}
