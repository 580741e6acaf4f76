//! Checkout and return of pooled surfaces.

use tracing::debug;

use super::{PreviewSurface, SurfacePool};

impl SurfacePool {
    /// Take an idle surface, or allocate one when none is idle.
    pub fn acquire(&mut self) -> PreviewSurface {
        let surface = match self.idle.pop() {
            Some(surface) => surface,
            None => self.allocate(),
        };
        self.checked_out.insert(surface.id());
        surface
    }

    /// Return a surface to the idle set. Returns `true` if it was kept for
    /// reuse.
    ///
    /// Only surfaces currently on loan are accepted. A double release, or a
    /// handle whose id was never lent or was already dropped, is ignored, so
    /// an id is never lent out twice. When the idle set is full the surface
    /// is dropped.
    pub fn release(&mut self, mut surface: PreviewSurface) -> bool {
        let id = surface.id();
        if !self.checked_out.remove(&id) {
            if self.is_idle(id) {
                debug!(surface = %id, "surface already idle, ignoring release");
            } else {
                debug!(surface = %id, "surface not checked out, ignoring release");
            }
            return false;
        }

        if self.idle.len() >= self.max_size {
            debug!(surface = %id, max = self.max_size, "pool full, dropping surface");
            return false;
        }
        surface.reset();
        self.idle.push(surface);
        true
    }
}
