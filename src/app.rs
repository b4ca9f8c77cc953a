use std::collections::HashMap;
use std::path::Path;

use uuid::Uuid;

use crate::character::SavedAttempt;
use crate::config::PadConfig;
use crate::input::InputHandler;
use crate::library;
use crate::panels;
use crate::state::{Action, AppState, Effect, View};
use crate::surface::{DrawingSurface, SharedSurface, Snapshot};

/// Only the config is persisted; everything else is per session.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct HanziPadApp {
    config: PadConfig,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    surface: SharedSurface,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    surface_texture: Option<egui::TextureHandle>,
    #[serde(skip)]
    thumbnails: HashMap<Uuid, egui::TextureHandle>,
}

impl Default for HanziPadApp {
    fn default() -> Self {
        Self {
            config: PadConfig::default(),
            state: AppState::new(),
            surface: SharedSurface::default(),
            input: InputHandler::new(),
            surface_texture: None,
            thumbnails: HashMap::new(),
        }
    }
}

impl HanziPadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        app.surface = SharedSurface::new(DrawingSurface::new(app.config.surface.clone()));

        // The env override applies to this run only and is not persisted
        let source = app.config.clone().with_env_overrides();
        app.load_library(source.library_path.as_deref());
        app
    }

    fn load_library(&mut self, path: Option<&Path>) {
        let action = match path {
            Some(path) => match library::load_listing_file(path) {
                Ok(records) => Action::LibraryLoaded(records),
                Err(err) => Action::LibraryUnavailable(err.to_string()),
            },
            None => Action::LibraryLoaded(library::builtin_characters()),
        };
        self.dispatch(action);
    }

    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    pub(crate) fn config(&self) -> &PadConfig {
        &self.config
    }

    pub(crate) fn dispatch(&mut self, action: Action) {
        if let Some(Effect::ResetSurface) = self.state.dispatch(action) {
            self.clear_drawing();
        }
    }

    pub(crate) fn surface(&self) -> &SharedSurface {
        &self.surface
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub(crate) fn set_pen_width(&mut self, pen_width: f32) {
        self.config.surface.pen_width = pen_width;
        self.surface.with(|surface| surface.set_pen_width(pen_width));
    }

    pub(crate) fn clear_drawing(&mut self) {
        self.surface.reset();
        self.input.cancel();
    }

    pub(crate) fn save_drawing(&mut self) {
        // Encoding runs inline, so the export is ready on first poll
        match futures::executor::block_on(self.surface.export_snapshot_async()) {
            Ok(snapshot) => self.dispatch(Action::save_attempt(snapshot.to_data_url())),
            Err(err) => log::error!("Failed to export drawing: {}", err),
        }
    }

    /// Upload the raster to the GPU if it changed since the last frame
    pub(crate) fn surface_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        let has_texture = self.surface_texture.is_some();
        let image = self.surface.with(|surface| {
            if !surface.take_dirty() && has_texture {
                return None;
            }
            surface.image().map(to_color_image)
        });

        if let Some(image) = image {
            match &mut self.surface_texture {
                Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.surface_texture =
                        Some(ctx.load_texture("drawing-surface", image, egui::TextureOptions::LINEAR));
                }
            }
        }
        self.surface_texture.as_ref().map(egui::TextureHandle::id)
    }

    pub(crate) fn thumbnail(&mut self, ctx: &egui::Context, attempt: &SavedAttempt) -> Option<egui::TextureId> {
        if let Some(texture) = self.thumbnails.get(&attempt.attempt_id()) {
            return Some(texture.id());
        }
        let decoded = Snapshot::from_data_url(attempt.drawing_snapshot()).and_then(|snapshot| snapshot.decode());
        match decoded {
            Ok(image) => {
                let texture = ctx.load_texture(
                    format!("saved-{}", attempt.attempt_id()),
                    to_color_image(&image),
                    egui::TextureOptions::LINEAR,
                );
                let id = texture.id();
                self.thumbnails.insert(attempt.attempt_id(), texture);
                Some(id)
            }
            Err(err) => {
                log::warn!("Cannot show drawing for attempt {}: {}", attempt.attempt_id(), err);
                None
            }
        }
    }
}

fn to_color_image(image: &image::RgbaImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width() as usize, image.height() as usize],
        image.as_raw(),
    )
}

impl eframe::App for HanziPadApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            panels::navigation(self, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.view() {
            View::Home => panels::home_panel(self, ui),
            View::Library => panels::library_panel(self, ui),
            View::Draw => panels::drawing_panel(self, ui),
            View::Saved => panels::saved_panel(self, ui),
        });
    }
}
