use crate::HanziPadApp;
use crate::state::{Action, View};

pub fn home_panel(app: &mut HanziPadApp, ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.heading("Welcome to Hanzi Pad!");
        ui.label("Learn Chinese characters by writing them, one stroke at a time.");
        ui.add_space(16.0);

        if ui.button("Start Learning").clicked() {
            app.dispatch(Action::Navigate(View::Library));
        }

        ui.add_space(16.0);
        ui.label(format!(
            "{} characters in the library, {} drawings saved",
            app.state().library().len(),
            app.state().saved().len()
        ));
    });
}
