use egui::{Context, PointerButton, Pos2, Rect, TouchPhase, Vec2};

/// Which physical contact produced an event. Mouse and touch are folded into
/// one model here so nothing past this module cares about the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch(u64),
}

/// Pointer input as delivered by the host, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawPointer {
    Down(PointerSource, Pos2),
    Move(PointerSource, Pos2),
    Up(PointerSource, Pos2),
    Leave(PointerSource),
}

/// A position translated into surface-local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position in surface pixels
    pub position: Pos2,
    /// Whether the original viewport position fell inside the on-screen canvas
    pub is_in_canvas: bool,
}

/// Normalized events consumed by the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        source: PointerSource,
        location: InputLocation,
    },
    PointerMove {
        source: PointerSource,
        location: InputLocation,
    },
    PointerUp {
        source: PointerSource,
        location: InputLocation,
    },
    PointerLeave {
        source: PointerSource,
    },
}

/// Maps viewport positions onto a surface that is drawn at `screen_rect`
/// but rasterized at `surface_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    screen_rect: Rect,
    surface_size: Vec2,
}

impl CanvasTransform {
    pub fn new(screen_rect: Rect, surface_size: Vec2) -> Self {
        Self {
            screen_rect,
            surface_size,
        }
    }

    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    fn scale(&self) -> Vec2 {
        let size = self.screen_rect.size();
        let axis = |surface: f32, screen: f32| if screen > 0.0 { surface / screen } else { 1.0 };
        Vec2::new(
            axis(self.surface_size.x, size.x),
            axis(self.surface_size.y, size.y),
        )
    }

    pub fn to_surface(&self, viewport: Pos2) -> InputLocation {
        let offset = viewport - self.screen_rect.min;
        let scale = self.scale();
        InputLocation {
            position: Pos2::new(offset.x * scale.x, offset.y * scale.y),
            is_in_canvas: self.screen_rect.contains(viewport),
        }
    }
}

/// Tracks the primary contact and turns raw pointer input into [`InputEvent`]s.
///
/// Only the first contact that lands on the canvas is followed; any other
/// mouse or touch input is dropped until that contact lifts or leaves.
#[derive(Debug, Default)]
pub struct InputHandler {
    active: Option<PointerSource>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_contact(&self) -> Option<PointerSource> {
        self.active
    }

    /// Forget the current contact, e.g. after the surface was cleared
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn normalize(&mut self, raw: RawPointer, transform: &CanvasTransform) -> Option<InputEvent> {
        match raw {
            RawPointer::Down(source, pos) => {
                if let Some(active) = self.active {
                    log::trace!("Ignoring {:?} down while tracking {:?}", source, active);
                    return None;
                }
                let location = transform.to_surface(pos);
                if !location.is_in_canvas {
                    return None;
                }
                self.active = Some(source);
                Some(InputEvent::PointerDown { source, location })
            }
            RawPointer::Move(source, pos) => {
                if self.active != Some(source) {
                    return None;
                }
                let location = transform.to_surface(pos);
                if location.is_in_canvas {
                    Some(InputEvent::PointerMove { source, location })
                } else {
                    self.active = None;
                    Some(InputEvent::PointerLeave { source })
                }
            }
            RawPointer::Up(source, pos) => {
                if self.active != Some(source) {
                    return None;
                }
                self.active = None;
                Some(InputEvent::PointerUp {
                    source,
                    location: transform.to_surface(pos),
                })
            }
            RawPointer::Leave(source) => {
                if self.active != Some(source) {
                    return None;
                }
                self.active = None;
                Some(InputEvent::PointerLeave { source })
            }
        }
    }

    /// Read this frame's egui events and normalize them against `transform`
    pub fn process_input(&mut self, ctx: &Context, transform: &CanvasTransform) -> Vec<InputEvent> {
        let raw_events: Vec<RawPointer> = ctx.input(|input| input.events.iter().filter_map(raw_pointer).collect());
        raw_events
            .into_iter()
            .filter_map(|raw| self.normalize(raw, transform))
            .collect()
    }
}

fn raw_pointer(event: &egui::Event) -> Option<RawPointer> {
    match event {
        egui::Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            ..
        } => Some(if *pressed {
            RawPointer::Down(PointerSource::Mouse, *pos)
        } else {
            RawPointer::Up(PointerSource::Mouse, *pos)
        }),
        egui::Event::PointerMoved(pos) => Some(RawPointer::Move(PointerSource::Mouse, *pos)),
        egui::Event::PointerGone => Some(RawPointer::Leave(PointerSource::Mouse)),
        egui::Event::Touch { id, phase, pos, .. } => {
            let source = PointerSource::Touch(id.0);
            Some(match phase {
                TouchPhase::Start => RawPointer::Down(source, *pos),
                TouchPhase::Move => RawPointer::Move(source, *pos),
                TouchPhase::End => RawPointer::Up(source, *pos),
                TouchPhase::Cancel => RawPointer::Leave(source),
            })
        }
        _ => None,
    }
}
