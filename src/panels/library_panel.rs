use egui::RichText;

use crate::HanziPadApp;
use crate::character::Difficulty;
use crate::filter::{SortBy, SortOrder, StrokeRange};
use crate::library;
use crate::state::{Action, LibraryStatus};

const MAX_STROKES: u32 = 64;

pub fn library_panel(app: &mut HanziPadApp, ui: &mut egui::Ui) {
    let mut filter = app.state().filter().clone();
    let categories = library::categories(app.state().library());

    ui.horizontal_wrapped(|ui| {
        ui.label("Search:");
        ui.text_edit_singleline(&mut filter.query);

        let difficulty_text = filter.difficulty.map_or("Any", Difficulty::label);
        egui::ComboBox::from_label("Difficulty")
            .selected_text(difficulty_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.difficulty, None, "Any");
                for difficulty in Difficulty::ALL {
                    ui.selectable_value(&mut filter.difficulty, Some(difficulty), difficulty.label());
                }
            });

        let category_text = filter
            .category
            .as_deref()
            .map_or("Any", library::category_label)
            .to_owned();
        egui::ComboBox::from_label("Category")
            .selected_text(category_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.category, None, "Any");
                for category in &categories {
                    ui.selectable_value(
                        &mut filter.category,
                        Some(category.clone()),
                        library::category_label(category),
                    );
                }
            });
    });

    ui.horizontal_wrapped(|ui| {
        let mut limit_strokes = filter.stroke_range.is_some();
        if ui.checkbox(&mut limit_strokes, "Strokes").changed() {
            filter.stroke_range = limit_strokes.then(|| StrokeRange::new(1, 10));
        }
        if let Some(range) = filter.stroke_range.as_mut() {
            let max = range.max;
            ui.add(egui::DragValue::new(&mut range.min).range(0..=max));
            ui.label("to");
            let min = range.min;
            ui.add(egui::DragValue::new(&mut range.max).range(min..=MAX_STROKES));
        }

        ui.separator();

        egui::ComboBox::from_label("Sort by")
            .selected_text(filter.sort_by.label())
            .show_ui(ui, |ui| {
                for sort_by in SortBy::ALL {
                    ui.selectable_value(&mut filter.sort_by, sort_by, sort_by.label());
                }
            });
        let order_text = match filter.sort_order {
            SortOrder::Ascending => "⬆ Ascending",
            SortOrder::Descending => "⬇ Descending",
        };
        if ui.button(order_text).clicked() {
            filter.sort_order = filter.sort_order.reversed();
        }
    });

    if &filter != app.state().filter() {
        app.dispatch(Action::SetFilter(filter));
    }

    ui.separator();

    let mut picked = None;
    if *app.state().library_status() == LibraryStatus::Loading {
        ui.spinner();
    } else {
        // An unavailable library renders exactly like an empty result
        let visible = app.state().visible_characters();
        if visible.is_empty() {
            ui.label("No characters match your search.");
        } else {
            ui.label(format!("{} characters", visible.len()));
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for record in &visible {
                        let text = RichText::new(format!("{}\n{}", record.glyph(), record.pronunciation())).size(22.0);
                        let response = ui
                            .add_sized([88.0, 72.0], egui::Button::new(text))
                            .on_hover_text(record.meaning());
                        if response.clicked() {
                            picked = Some((*record).clone());
                        }
                    }
                });
            });
        }
    }

    if let Some(record) = picked {
        app.dispatch(Action::SelectCharacter(record));
    }
}
