use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::character::CharacterRecord;
use crate::filter::FilterSortConfig;

use super::View;

/// Everything that can change the application state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(View),
    SelectCharacter(CharacterRecord),
    /// Store the current drawing for the selected character
    SaveAttempt {
        attempt_id: Uuid,
        drawing: String,
        saved_at: DateTime<Utc>,
    },
    SetFilter(FilterSortConfig),
    LibraryLoaded(Vec<CharacterRecord>),
    LibraryUnavailable(String),
}

impl Action {
    /// Stamp a save with a fresh id and the current time
    pub fn save_attempt(drawing: String) -> Self {
        Self::SaveAttempt {
            attempt_id: Uuid::new_v4(),
            drawing,
            saved_at: Utc::now(),
        }
    }
}

/// Work the host must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The selected character changed; wipe the drawing surface
    ResetSurface,
}
