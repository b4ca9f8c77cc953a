//! Filtering and ordering of the character library.
//!
//! [`apply`] is a pure projection: it never touches the input slice and is
//! cheap enough to rerun on every keystroke.

mod sort;

pub use sort::{SortBy, SortOrder, sort_records};

use serde::{Deserialize, Serialize};

use crate::character::{CharacterRecord, Difficulty};

/// Inclusive stroke-count bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeRange {
    pub min: u32,
    pub max: u32,
}

impl StrokeRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, stroke_count: u32) -> bool {
        self.min <= stroke_count && stroke_count <= self.max
    }
}

/// What the library view is currently showing. Rebuilt on every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSortConfig {
    pub query: String,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub stroke_range: Option<StrokeRange>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for FilterSortConfig {
    fn default() -> Self {
        Self {
            query: String::new(),
            difficulty: None,
            category: None,
            stroke_range: None,
            sort_by: SortBy::Frequency,
            sort_order: SortOrder::Ascending,
        }
    }
}

impl FilterSortConfig {
    pub fn sorted(sort_by: SortBy, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_stroke_range(mut self, stroke_range: Option<StrokeRange>) -> Self {
        self.stroke_range = stroke_range;
        self
    }

    /// True when every constraint present is satisfied by `record`
    pub fn matches(&self, record: &CharacterRecord) -> bool {
        matches_query(record, &self.query)
            && self.difficulty.is_none_or(|d| record.difficulty() == d)
            && self
                .category
                .as_deref()
                .is_none_or(|c| record.category() == c)
            && self
                .stroke_range
                .is_none_or(|range| range.contains(record.stroke_count()))
    }
}

/// The query matches the glyph, or the lowercased pronunciation or meaning.
fn matches_query(record: &CharacterRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    record.glyph().contains(&query)
        || record.pronunciation().to_lowercase().contains(&query)
        || record.meaning().to_lowercase().contains(&query)
}

/// Filter `records` by `config` and order the survivors.
pub fn apply<'a>(records: &'a [CharacterRecord], config: &FilterSortConfig) -> Vec<&'a CharacterRecord> {
    let mut visible: Vec<&CharacterRecord> = records.iter().filter(|r| config.matches(r)).collect();
    sort_records(&mut visible, config.sort_by, config.sort_order);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(glyph: &str, pronunciation: &str, meaning: &str) -> CharacterRecord {
        CharacterRecord::new(glyph, glyph, pronunciation, meaning)
    }

    #[test]
    fn query_is_case_insensitive_on_pronunciation_and_meaning() {
        let r = record("好", "Hao", "Good");
        assert!(matches_query(&r, "hao"));
        assert!(matches_query(&r, "GOOD"));
        assert!(matches_query(&r, "好"));
        assert!(!matches_query(&r, "ni"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query(&record("一", "", ""), ""));
    }

    #[test]
    fn stroke_range_is_inclusive() {
        let range = StrokeRange::new(3, 5);
        assert!(range.contains(3));
        assert!(range.contains(5));
        assert!(!range.contains(2));
        assert!(!range.contains(6));
    }
}
