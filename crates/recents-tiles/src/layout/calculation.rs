//! Layout calculation: reference desktop geometry to tile-local rects.
//!
//! All arithmetic is done in `f32` and the final components are truncated
//! toward zero, matching the pixel snapping of the window manager.

use recents_common::types::{Point, Rect};

use crate::descriptor::WindowDescriptor;

use super::{Gravity, LayoutContext, LayoutError, SurfaceLayout, TileScale};

impl TileScale {
    /// Scale from the reference desktop to the area below the top margin.
    pub fn compute(ctx: &LayoutContext) -> Result<Self, LayoutError> {
        if ctx.window_width == 0 || ctx.window_height == 0 {
            return Err(LayoutError::DegenerateReference {
                width: ctx.window_width,
                height: ctx.window_height,
            });
        }
        let container_width = ctx.container_width;
        let container_height = ctx.container_height.saturating_sub(ctx.top_margin);
        Ok(Self {
            width: container_width as f32 / ctx.window_width as f32,
            height: container_height as f32 / ctx.window_height as f32,
        })
    }
}

/// Stand-in bounds for a window that has not reported any: a quarter of the
/// reference desktop in each dimension.
pub fn fallback_task_size(window_width: i32, window_height: i32) -> Rect {
    Rect::from_size(window_width / 4, window_height / 4)
}

/// Place one window of the desktop inside the tile, at the same relative
/// position it has on the real desktop.
pub fn layout_window(
    descriptor: &WindowDescriptor,
    scale: TileScale,
    ctx: &LayoutContext,
) -> SurfaceLayout {
    let task_size = descriptor
        .app_bounds
        .unwrap_or_else(|| fallback_task_size(ctx.window_width, ctx.window_height));
    let position = descriptor.position_in_parent.unwrap_or(Point::ORIGIN);

    SurfaceLayout {
        gravity: Gravity::TopLeft,
        width: (task_size.width() as f32 * scale.width) as i32,
        height: (task_size.height() as f32 * scale.height) as i32,
        left: (position.x as f32 * scale.width) as i32,
        top: ((position.y as f32 * scale.height) as i32).saturating_add(ctx.top_margin),
    }
}

/// Single thumbnail covering the whole area below the top margin.
pub fn fill_layout(ctx: &LayoutContext) -> SurfaceLayout {
    SurfaceLayout {
        gravity: Gravity::Fill,
        left: 0,
        top: ctx.top_margin,
        width: ctx.container_width,
        height: ctx.container_height.saturating_sub(ctx.top_margin).max(0),
    }
}
