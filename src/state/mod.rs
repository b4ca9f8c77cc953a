//! Application state and its transitions.
//!
//! All state lives in [`AppState`] and only changes through
//! [`AppState::dispatch`], which performs no I/O and returns any follow-up
//! work as an [`Effect`].

mod action;

pub use action::{Action, Effect};

use serde::{Deserialize, Serialize};

use crate::character::{CharacterRecord, SavedAttempt};
use crate::filter::{self, FilterSortConfig};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    #[default]
    Home,
    Library,
    Draw,
    Saved,
}

impl View {
    pub const ALL: [View; 4] = [Self::Home, Self::Draw, Self::Library, Self::Saved];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Library => "Library",
            Self::Draw => "Draw",
            Self::Saved => "Saved",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub enum LibraryStatus {
    #[default]
    Loading,
    Ready,
    /// Loading failed; shown like an empty library
    Unavailable(String),
}

#[derive(Debug, Default, Clone)]
pub struct AppState {
    view: View,
    library: Vec<CharacterRecord>,
    library_status: LibraryStatus,
    selected: Option<CharacterRecord>,
    saved: Vec<SavedAttempt>,
    filter: FilterSortConfig,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn library(&self) -> &[CharacterRecord] {
        &self.library
    }

    pub fn library_status(&self) -> &LibraryStatus {
        &self.library_status
    }

    pub fn selected(&self) -> Option<&CharacterRecord> {
        self.selected.as_ref()
    }

    pub fn saved(&self) -> &[SavedAttempt] {
        &self.saved
    }

    pub fn filter(&self) -> &FilterSortConfig {
        &self.filter
    }

    /// The library as the current filter shows it
    pub fn visible_characters(&self) -> Vec<&CharacterRecord> {
        filter::apply(&self.library, &self.filter)
    }

    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Navigate(View::Draw) if self.selected.is_none() => {
                log::debug!("Nothing selected to draw, showing library");
                self.view = View::Library;
                None
            }
            Action::Navigate(view) => {
                self.view = view;
                None
            }
            Action::SelectCharacter(character) => {
                let changed = self
                    .selected
                    .as_ref()
                    .is_none_or(|current| current.id() != character.id());
                log::info!("Selected {} ({})", character.glyph(), character.id());
                self.selected = Some(character);
                self.view = View::Draw;
                changed.then_some(Effect::ResetSurface)
            }
            Action::SaveAttempt {
                attempt_id,
                drawing,
                saved_at,
            } => {
                let Some(character) = self.selected.clone() else {
                    log::warn!("Save requested with no character selected");
                    return None;
                };
                log::info!("Saved attempt {} for {}", attempt_id, character.glyph());
                self.saved
                    .push(SavedAttempt::new(attempt_id, character, drawing, saved_at));
                self.view = View::Saved;
                None
            }
            Action::SetFilter(filter) => {
                self.filter = filter;
                None
            }
            Action::LibraryLoaded(records) => {
                log::info!("Library loaded with {} characters", records.len());
                self.library = records;
                self.library_status = LibraryStatus::Ready;
                None
            }
            Action::LibraryUnavailable(reason) => {
                log::error!("Character library unavailable: {}", reason);
                self.library.clear();
                self.library_status = LibraryStatus::Unavailable(reason);
                None
            }
        }
    }
}
