use egui::{RichText, vec2};

use crate::HanziPadApp;
use crate::state::Action;

const THUMBNAIL_SIZE: f32 = 96.0;

pub fn saved_panel(app: &mut HanziPadApp, ui: &mut egui::Ui) {
    ui.heading("Saved Characters");

    if app.state().saved().is_empty() {
        ui.label("No saved drawings yet.");
        return;
    }

    let attempts = app.state().saved().to_vec();
    let mut reopen = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for attempt in &attempts {
                let thumbnail = app.thumbnail(ui.ctx(), attempt);
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(attempt.character().glyph()).size(32.0));
                        if let Some(texture) = thumbnail {
                            ui.image((texture, vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE)));
                        }
                        ui.small(attempt.saved_at().format("%Y-%m-%d %H:%M").to_string());
                        ui.small(format!("Practiced {}x", attempt.practice_count()));
                        if ui.button("Practice again").clicked() {
                            reopen = Some(attempt.character().clone());
                        }
                    });
                });
            }
        });
    });

    if let Some(character) = reopen {
        app.dispatch(Action::SelectCharacter(character));
    }
}
