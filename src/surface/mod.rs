//! The freehand drawing surface.
//!
//! ```text
//!            pointer down
//!   ┌──────┐ ────────────► ┌───────────┐ ◄─┐
//!   │ Idle │               │ Stroking  │   │ pointer move: ink segment
//!   └──────┘ ◄──────────── └───────────┘ ──┘
//!            up / leave / reset
//! ```
//!
//! Every move is rendered immediately from the last pen position, so the
//! raster is always current and a snapshot never misses a segment.

mod raster;
mod shared;
mod snapshot;
mod stroke;

pub use raster::Raster;
pub use shared::SharedSurface;
pub use snapshot::Snapshot;
pub use stroke::StrokePath;

use egui::{Pos2, Vec2};
use image::{Rgba, RgbaImage};

use crate::config::SurfaceConfig;
use crate::error::{SurfaceError, SurfaceResult};
use crate::input::InputEvent;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SurfaceState {
    #[default]
    Idle,
    Stroking {
        path: StrokePath,
    },
}

#[derive(Debug)]
pub struct DrawingSurface {
    config: SurfaceConfig,
    /// `None` until the surface is attached to a view
    raster: Option<Raster>,
    state: SurfaceState,
    /// Set whenever pixels change, cleared by [`DrawingSurface::take_dirty`]
    dirty: bool,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::detached(SurfaceConfig::default())
    }
}

impl DrawingSurface {
    /// A surface with a blank raster ready to draw on
    pub fn new(config: SurfaceConfig) -> Self {
        let mut surface = Self::detached(config);
        surface.attach();
        surface
    }

    /// A surface without a raster; drawing on it does nothing
    pub fn detached(config: SurfaceConfig) -> Self {
        Self {
            config,
            raster: None,
            state: SurfaceState::Idle,
            dirty: false,
        }
    }

    /// Allocate the raster. Calling this on an attached surface keeps its ink.
    pub fn attach(&mut self) {
        if self.raster.is_none() {
            log::debug!("Attaching {}px drawing surface", self.config.size);
            self.raster = Some(Raster::new(self.config.size, Rgba(self.config.background)));
            self.dirty = true;
        }
    }

    pub fn is_attached(&self) -> bool {
        self.raster.is_some()
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn set_pen_width(&mut self, pen_width: f32) {
        self.config.pen_width = pen_width;
    }

    /// Logical size in surface pixels
    pub fn size(&self) -> Vec2 {
        Vec2::splat(self.config.size as f32)
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.state, SurfaceState::Stroking { .. })
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.raster.as_ref().map(Raster::image)
    }

    /// Returns true once after any change to the pixels
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn begin_stroke(&mut self, position: Pos2) {
        if self.raster.is_none() {
            log::trace!("begin_stroke on detached surface ignored");
            return;
        }
        if let SurfaceState::Stroking { path } = &self.state {
            log::debug!("Closing unfinished stroke of {} points", path.len());
        }
        self.state = SurfaceState::Stroking {
            path: StrokePath::starting_at(position),
        };
    }

    pub fn extend_stroke(&mut self, position: Pos2) {
        let Some(raster) = self.raster.as_mut() else {
            log::trace!("extend_stroke on detached surface ignored");
            return;
        };
        let SurfaceState::Stroking { path } = &mut self.state else {
            return;
        };
        if let Some(pen) = path.last() {
            raster.draw_segment(pen, position, self.config.pen_width, Rgba(self.config.ink));
            self.dirty = true;
        }
        path.add_point(position);
    }

    pub fn end_stroke(&mut self) {
        if let SurfaceState::Stroking { path } = std::mem::take(&mut self.state) {
            log::debug!("Stroke finished with {} points", path.len());
        }
    }

    /// Clear all ink. Also abandons any stroke in progress so the next move
    /// cannot draw from a stale pen position.
    pub fn reset(&mut self) {
        self.state = SurfaceState::Idle;
        if let Some(raster) = self.raster.as_mut() {
            raster.clear();
            self.dirty = true;
            log::debug!("Drawing surface cleared");
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { location, .. } => self.begin_stroke(location.position),
            InputEvent::PointerMove { location, .. } => self.extend_stroke(location.position),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave { .. } => self.end_stroke(),
        }
    }

    /// Encode the raster exactly as last rendered, in-progress stroke included
    pub fn export_snapshot(&self) -> SurfaceResult<Snapshot> {
        let raster = self.raster.as_ref().ok_or(SurfaceError::NotAttached)?;
        Snapshot::encode(raster.image())
    }

    /// Copy of the current pixels, for encoding elsewhere
    pub(crate) fn capture(&self) -> SurfaceResult<RgbaImage> {
        self.raster
            .as_ref()
            .map(|raster| raster.image().clone())
            .ok_or(SurfaceError::NotAttached)
    }
}
