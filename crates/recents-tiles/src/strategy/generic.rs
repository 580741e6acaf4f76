//! Single-window tiles: one thumbnail stretched over the tile.

use crate::binding::TaskBinding;
use crate::chrome::BackgroundChrome;
use crate::layout::{fill_layout, LayoutContext, LayoutError, TileScale};

use super::{FullscreenDrawParams, TileStrategy};

#[derive(Debug, Default, Clone, Copy)]
pub struct GenericStrategy;

impl TileStrategy for GenericStrategy {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn drawn_corner_radius(&self, params: &FullscreenDrawParams, progress: f32) -> f32 {
        params.interpolated_radius(progress)
    }

    fn on_fullscreen_progress(&self, _progress: f32, _background: &mut BackgroundChrome) {}

    fn on_icon_loaded(&self, binding: &mut TaskBinding) {
        let title = binding.descriptor().title.clone();
        binding.surface_mut().set_content_description(title);
    }

    fn on_icon_unloaded(&self, binding: &mut TaskBinding) {
        binding.surface_mut().set_content_description("");
    }

    fn layout_thumbnails(
        &self,
        ctx: &LayoutContext,
        bindings: &mut [TaskBinding],
    ) -> Result<Option<TileScale>, LayoutError> {
        let layout = fill_layout(ctx);
        for binding in bindings.iter_mut() {
            binding.surface_mut().set_layout(layout);
        }
        Ok(None)
    }
}
