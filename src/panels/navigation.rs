use crate::HanziPadApp;
use crate::state::{Action, View};

pub fn navigation(app: &mut HanziPadApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.strong("Hanzi Pad");
        ui.separator();
        for view in View::ALL {
            let is_active = app.state().view() == view;
            if ui.selectable_label(is_active, view.label()).clicked() {
                log::debug!("Navigating to {:?}", view);
                app.dispatch(Action::Navigate(view));
            }
        }
    });
}
