//! Size changes, fullscreen progress and bounds queries.

use recents_common::types::{Rect, Size};
use tracing::{debug, trace};

use crate::layout::{LayoutContext, LayoutError};
use crate::profile::DeviceProfile;
use crate::strategy::UpdateFlag;

use super::TileController;

impl TileController {
    /// Record the new tile size and reposition every thumbnail.
    ///
    /// With no bindings nothing is computed.
    pub fn update_task_size(&mut self, container: Size) -> Result<(), LayoutError> {
        self.container_size = Some(container);
        if self.bindings.is_empty() {
            return Ok(());
        }

        let ctx = self.layout_context(container);
        self.scale = self.strategy.layout_thumbnails(&ctx, &mut self.bindings)?;
        debug!(
            tile = %self.id,
            width = container.width,
            height = container.height,
            scale = ?self.scale,
            "tile relayout"
        );
        Ok(())
    }

    /// Swap the device profile (e.g. after a display change) and relayout.
    pub fn set_device_profile(&mut self, profile: DeviceProfile) -> Result<(), LayoutError> {
        self.background.top_margin = profile.thumbnail_top_margin_px;
        self.draw_params.window_corner_radius = profile.window_corner_radius;
        self.profile = profile;
        self.refresh_drawn_corner_radius();
        match self.container_size {
            Some(size) => self.update_task_size(size),
            None => Ok(()),
        }
    }

    /// Progress of the overview-to-fullscreen animation, clamped to 0..=1.
    pub fn set_fullscreen_progress(&mut self, progress: f32) {
        let progress = progress.clamp(0.0, 1.0);
        self.draw_params.fullscreen_progress = progress;
        self.strategy
            .on_fullscreen_progress(progress, &mut self.background);
        self.refresh_drawn_corner_radius();
        trace!(tile = %self.id, progress, "fullscreen progress");
    }

    pub fn needs_update(&self, changed: &[UpdateFlag], flag: UpdateFlag) -> bool {
        self.strategy.needs_update(changed, flag)
    }

    /// Background bounds of the tile, in tile-local coordinates or offset by
    /// the tile's position in the top-level container.
    pub fn thumbnail_bounds(&self, relative_to_container: bool) -> Rect {
        let size = self.container_size.unwrap_or(Size::new(0, 0));
        let bounds = self.background.bounds(size.width, size.height);
        if relative_to_container {
            bounds.offset(self.position_in_container.x, self.position_in_container.y)
        } else {
            bounds
        }
    }

    pub(super) fn layout_context(&self, container: Size) -> LayoutContext {
        let (window_width, window_height) = self.profile.task_dimension();
        LayoutContext {
            container_width: container.width,
            container_height: container.height,
            top_margin: self.profile.thumbnail_top_margin_px,
            window_width,
            window_height,
        }
    }

    fn refresh_drawn_corner_radius(&mut self) {
        let progress = self.draw_params.fullscreen_progress;
        self.draw_params.current_drawn_corner_radius =
            self.strategy.drawn_corner_radius(&self.draw_params, progress);
    }
}
