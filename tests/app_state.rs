use chrono::{TimeZone, Utc};
use hanzi_pad::state::LibraryStatus;
use hanzi_pad::{Action, AppState, CharacterRecord, Effect, FilterSortConfig, View};
use uuid::Uuid;

fn record(id: &str, glyph: &str) -> CharacterRecord {
    CharacterRecord::new(id, glyph, "", "")
}

fn loaded() -> AppState {
    let mut state = AppState::new();
    state.dispatch(Action::LibraryLoaded(vec![record("1", "你"), record("2", "好")]));
    state
}

fn save(drawing: &str) -> Action {
    Action::SaveAttempt {
        attempt_id: Uuid::new_v4(),
        drawing: drawing.to_owned(),
        saved_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn starts_on_home_while_loading() {
    let state = AppState::new();
    assert_eq!(state.view(), View::Home);
    assert_eq!(*state.library_status(), LibraryStatus::Loading);
}

#[test]
fn selecting_navigates_to_draw() {
    let mut state = loaded();
    state.dispatch(Action::SelectCharacter(record("1", "你")));
    assert_eq!(state.view(), View::Draw);
    assert_eq!(state.selected().map(|c| c.glyph()), Some("你"));
}

#[test]
fn changing_character_resets_surface() {
    let mut state = loaded();
    assert_eq!(
        state.dispatch(Action::SelectCharacter(record("1", "你"))),
        Some(Effect::ResetSurface)
    );
    assert_eq!(state.dispatch(Action::SelectCharacter(record("1", "你"))), None);
    assert_eq!(
        state.dispatch(Action::SelectCharacter(record("2", "好"))),
        Some(Effect::ResetSurface)
    );
}

#[test]
fn draw_without_selection_lands_on_library() {
    let mut state = loaded();
    state.dispatch(Action::Navigate(View::Draw));
    assert_eq!(state.view(), View::Library);
}

#[test]
fn saving_appends_attempt_and_shows_saved() {
    let mut state = loaded();
    state.dispatch(Action::SelectCharacter(record("2", "好")));
    state.dispatch(save("data:image/png;base64,AAAA"));
    state.dispatch(Action::Navigate(View::Draw));
    state.dispatch(save("data:image/png;base64,BBBB"));

    assert_eq!(state.view(), View::Saved);
    let saved = state.saved();
    assert_eq!(saved.len(), 2);
    assert!(saved.iter().all(|a| a.character().id() == "2" && a.practice_count() == 1));
    assert_ne!(saved[0].attempt_id(), saved[1].attempt_id());
    assert_eq!(saved[0].drawing_snapshot(), "data:image/png;base64,AAAA");
    assert_eq!(saved[0].saved_at_iso(), "2024-05-01T12:00:00+00:00");
}

#[test]
fn save_without_selection_is_ignored() {
    let mut state = loaded();
    state.dispatch(save("data:image/png;base64,AAAA"));
    assert!(state.saved().is_empty());
    assert_eq!(state.view(), View::Home);
}

#[test]
fn filter_drives_visible_characters() {
    let mut state = loaded();
    state.dispatch(Action::SetFilter(FilterSortConfig::default().with_query("好")));
    let visible: Vec<&str> = state.visible_characters().iter().map(|c| c.id()).collect();
    assert_eq!(visible, vec!["2"]);
}

#[test]
fn unavailable_library_looks_empty() {
    let mut state = loaded();
    state.dispatch(Action::LibraryUnavailable("connection refused".to_owned()));
    assert!(state.visible_characters().is_empty());
    assert!(matches!(state.library_status(), LibraryStatus::Unavailable(_)));
}
