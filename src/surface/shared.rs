use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{DrawingSurface, Snapshot};
use crate::error::SurfaceResult;
use crate::input::InputEvent;

/// A drawing surface that can be handed to code running outside the UI
/// callback, such as an encoder task.
#[derive(Debug, Clone)]
pub struct SharedSurface {
    inner: Arc<Mutex<DrawingSurface>>,
}

impl Default for SharedSurface {
    fn default() -> Self {
        Self::new(DrawingSurface::default())
    }
}

impl SharedSurface {
    pub fn new(surface: DrawingSurface) -> Self {
        Self {
            inner: Arc::new(Mutex::new(surface)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut DrawingSurface) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn handle_event(&self, event: &InputEvent) {
        self.inner.lock().handle_event(event);
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// The pixels are captured under the lock when this is called; encoding
    /// happens when the future is polled. A `reset` issued in between does
    /// not change what gets exported.
    pub fn export_snapshot_async(&self) -> impl Future<Output = SurfaceResult<Snapshot>> + Send + use<> {
        let captured = self.inner.lock().capture();
        async move { Snapshot::encode(&captured?) }
    }
}
