use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How demanding a character is to write
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Ordinal used when sorting by difficulty
    pub fn rank(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// One learnable character. Built once when the library loads and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    id: String,
    glyph: String,
    pronunciation: String,
    meaning: String,
    english_gloss: String,
    /// 0 when unknown
    #[serde(default)]
    stroke_count: u32,
    #[serde(default)]
    difficulty: Difficulty,
    #[serde(default)]
    category: String,
    /// Rank, lower is more common
    #[serde(default)]
    frequency: Option<u32>,
}

impl CharacterRecord {
    pub fn new(
        id: impl Into<String>,
        glyph: impl Into<String>,
        pronunciation: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        let meaning = meaning.into();
        Self {
            id: id.into(),
            glyph: glyph.into(),
            pronunciation: pronunciation.into(),
            english_gloss: meaning.clone(),
            meaning,
            stroke_count: 0,
            difficulty: Difficulty::Beginner,
            category: String::new(),
            frequency: None,
        }
    }

    pub fn with_english_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.english_gloss = gloss.into();
        self
    }

    pub fn with_stroke_count(mut self, stroke_count: u32) -> Self {
        self.stroke_count = stroke_count;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_frequency(mut self, frequency: Option<u32>) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn english_gloss(&self) -> &str {
        &self.english_gloss
    }

    pub fn stroke_count(&self) -> u32 {
        self.stroke_count
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn frequency(&self) -> Option<u32> {
        self.frequency
    }
}

/// A practiced character together with the drawing that was saved for it.
/// Lives only in the session's saved list.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedAttempt {
    attempt_id: Uuid,
    character: CharacterRecord,
    drawing_snapshot: String,
    saved_at: DateTime<Utc>,
    practice_count: u32,
}

impl SavedAttempt {
    pub fn new(
        attempt_id: Uuid,
        character: CharacterRecord,
        drawing_snapshot: String,
        saved_at: DateTime<Utc>,
    ) -> Self {
        Self {
            attempt_id,
            character,
            drawing_snapshot,
            saved_at,
            practice_count: 1,
        }
    }

    pub fn attempt_id(&self) -> Uuid {
        self.attempt_id
    }

    pub fn character(&self) -> &CharacterRecord {
        &self.character
    }

    /// Encoded image payload, a PNG data URL
    pub fn drawing_snapshot(&self) -> &str {
        &self.drawing_snapshot
    }

    pub fn saved_at(&self) -> DateTime<Utc> {
        self.saved_at
    }

    /// ISO-8601 creation time
    pub fn saved_at_iso(&self) -> String {
        self.saved_at.to_rfc3339()
    }

    pub fn practice_count(&self) -> u32 {
        self.practice_count
    }
}
