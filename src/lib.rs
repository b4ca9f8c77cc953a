#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod character;
pub mod config;
pub mod error;
pub mod filter;
pub mod input;
pub mod library;
pub mod panels;
pub mod state;
pub mod surface;

pub use app::HanziPadApp;
pub use character::{CharacterRecord, Difficulty, SavedAttempt};
pub use config::{PadConfig, SurfaceConfig};
pub use error::{LibraryError, SurfaceError};
pub use filter::{FilterSortConfig, SortBy, SortOrder, StrokeRange};
pub use input::{InputEvent, InputHandler, InputLocation, PointerSource};
pub use state::{Action, AppState, Effect, View};
pub use surface::{DrawingSurface, SharedSurface, Snapshot};
