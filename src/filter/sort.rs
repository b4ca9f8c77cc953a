use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::character::CharacterRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Frequency,
    Strokes,
    Alphabetical,
    Difficulty,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [Self::Frequency, Self::Strokes, Self::Alphabetical, Self::Difficulty];

    pub fn label(self) -> &'static str {
        match self {
            Self::Frequency => "Frequency",
            Self::Strokes => "Strokes",
            Self::Alphabetical => "Alphabetical",
            Self::Difficulty => "Difficulty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

fn compare(left: &CharacterRecord, right: &CharacterRecord, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Frequency => {
            // unknown frequency sinks to the end
            let left_freq = left.frequency().unwrap_or(u32::MAX);
            let right_freq = right.frequency().unwrap_or(u32::MAX);
            left_freq.cmp(&right_freq)
        }
        SortBy::Strokes => left.stroke_count().cmp(&right.stroke_count()),
        SortBy::Alphabetical => left.glyph().cmp(right.glyph()),
        SortBy::Difficulty => left.difficulty().rank().cmp(&right.difficulty().rank()),
    }
}

/// Stable sort: records with equal keys keep their input order in both directions.
pub fn sort_records(records: &mut [&CharacterRecord], sort_by: SortBy, order: SortOrder) {
    records.sort_by(|left, right| {
        let ordering = compare(left, right, sort_by);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}
