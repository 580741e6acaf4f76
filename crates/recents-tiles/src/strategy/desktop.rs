//! Desktop tiles: every window of a free-form desktop, shrunk in place.

use crate::binding::TaskBinding;
use crate::chrome::BackgroundChrome;
use crate::layout::{layout_window, LayoutContext, LayoutError, TileScale};

use super::{FullscreenDrawParams, TileStrategy, UpdateFlag};

#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopStrategy;

impl TileStrategy for DesktopStrategy {
    fn name(&self) -> &'static str {
        "desktop"
    }

    /// Thumbnails always use the window corner radius.
    fn drawn_corner_radius(&self, params: &FullscreenDrawParams, _progress: f32) -> f32 {
        params.window_corner_radius
    }

    fn needs_update(&self, changed: &[UpdateFlag], flag: UpdateFlag) -> bool {
        if flag == UpdateFlag::CornerRadius {
            return false;
        }
        changed.contains(&flag)
    }

    fn on_fullscreen_progress(&self, progress: f32, background: &mut BackgroundChrome) {
        background.alpha = 1.0 - progress;
    }

    // All windows share the desktop icon; only the description changes.
    fn on_icon_loaded(&self, binding: &mut TaskBinding) {
        let title = binding.descriptor().title.clone();
        binding.surface_mut().set_content_description(title);
    }

    fn on_icon_unloaded(&self, _binding: &mut TaskBinding) {}

    fn layout_thumbnails(
        &self,
        ctx: &LayoutContext,
        bindings: &mut [TaskBinding],
    ) -> Result<Option<TileScale>, LayoutError> {
        let scale = TileScale::compute(ctx)?;
        for binding in bindings.iter_mut() {
            let layout = layout_window(binding.descriptor(), scale, ctx);
            binding.surface_mut().set_layout(layout);
        }
        Ok(Some(scale))
    }

    fn supports_split_select(&self) -> bool {
        false
    }
}
