//! Bind and recycle: generation replacement for TileController.

use std::rc::Rc;

use recents_common::TileEvent;
use tracing::{debug, warn};

use crate::binding::TaskBinding;
use crate::descriptor::WindowDescriptor;

use super::{Orientation, TileController};

impl TileController {
    /// Show `windows` in this tile, replacing whatever it showed before.
    ///
    /// The previous generation is torn down completely (pending loads
    /// cancelled, surfaces detached and returned) before the first surface
    /// of the new one is obtained.
    pub fn bind(&mut self, windows: &[WindowDescriptor], orientation: Orientation) {
        debug!(
            tile = %self.id,
            tasks = windows.len(),
            keys = ?windows.iter().map(|w| w.key.0).collect::<Vec<_>>(),
            "bind"
        );
        self.cancel_pending_loads();
        self.release_generation();

        let mut next = Vec::with_capacity(windows.len());
        for descriptor in windows {
            let surface = self.surfaces.obtain();
            self.children.insert_surface(surface.id());
            next.push(TaskBinding::new(
                descriptor.clone(),
                surface,
                Rc::clone(&self.icon),
            ));
        }
        self.bindings = next;
        self.generation_count += 1;

        let origin = self.load_origin();
        for binding in &mut self.bindings {
            binding.bind(self.loader.as_mut(), origin.clone(), &self.generation);
        }
        self.set_orientation(orientation);

        if let Some(size) = self.container_size {
            if let Err(e) = self.update_task_size(size) {
                warn!(tile = %self.id, "layout after bind failed: {e}");
            }
        }

        self.publish(TileEvent::Bound {
            tile: self.id.clone(),
            count: self.bindings.len(),
        });
    }

    /// Make the tile available for different data. Safe to call repeatedly.
    pub fn recycle(&mut self) {
        self.visible = true;
        let had_bindings = !self.bindings.is_empty();
        self.cancel_pending_loads();
        self.release_generation();
        self.scale = None;
        if had_bindings {
            debug!(tile = %self.id, "recycled");
        }
        self.publish(TileEvent::Recycled {
            tile: self.id.clone(),
        });
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            debug!(tile = %self.id, ?orientation, "orientation changed");
        }
        self.orientation = orientation;
    }

    /// Detach every surface of the current generation and hand it back to
    /// the surface source.
    pub(super) fn release_generation(&mut self) {
        for binding in self.bindings.drain(..) {
            let surface = binding.into_surface();
            if !self.children.remove_surface(surface.id()) {
                warn!(tile = %self.id, surface = %surface.id(), "surface was not attached");
            }
            self.surfaces.reclaim(surface);
        }
    }
}
