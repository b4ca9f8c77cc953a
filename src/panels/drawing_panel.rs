use egui::{Color32, Rect, RichText, Sense, Stroke, pos2, vec2};

use crate::HanziPadApp;
use crate::input::CanvasTransform;
use crate::state::{Action, View};

const MIN_CANVAS: f32 = 64.0;

pub fn drawing_panel(app: &mut HanziPadApp, ui: &mut egui::Ui) {
    let Some(character) = app.state().selected().cloned() else {
        ui.label("Pick a character from the library to start practicing.");
        return;
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(character.glyph()).size(56.0).strong());
        ui.vertical(|ui| {
            ui.label(format!("Pinyin: {}", character.pronunciation()));
            ui.label(format!("Meaning: {}", character.meaning()));
            if character.stroke_count() > 0 {
                ui.label(format!("Strokes: {}", character.stroke_count()));
            }
        });
    });
    ui.separator();

    let side = app.config().display_size.min(ui.available_width()).max(MIN_CANVAS);
    let (rect, _response) = ui.allocate_exact_size(vec2(side, side), Sense::drag());

    let transform = CanvasTransform::new(rect, app.surface().with(|surface| surface.size()));
    let events = app.input_mut().process_input(ui.ctx(), &transform);
    for event in &events {
        app.surface().handle_event(event);
    }

    if let Some(texture) = app.surface_texture(ui.ctx()) {
        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        ui.painter().image(texture, rect, uv, Color32::WHITE);
    }
    ui.painter().rect_stroke(rect, 4.0, Stroke::new(1.0, Color32::GRAY));

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Clear").clicked() {
            app.clear_drawing();
        }
        if ui.button("Save Progress").clicked() {
            app.save_drawing();
        }
        if ui.button("Choose New Character").clicked() {
            app.dispatch(Action::Navigate(View::Library));
        }
    });

    ui.horizontal(|ui| {
        let mut pen_width = app.config().surface.pen_width;
        ui.label("Pen width:");
        if ui.add(egui::Slider::new(&mut pen_width, 1.0..=30.0)).changed() {
            app.set_pen_width(pen_width);
        }
    });
}
