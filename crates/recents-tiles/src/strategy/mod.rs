//! Per-kind tile behavior injected into the shared tile skeleton.
//!
//! The controller owns bind/recycle/pool management for every tile kind;
//! a strategy decides how corners are drawn, how fullscreen progress is
//! reflected, and how thumbnails are sized.

mod desktop;
mod fullscreen;
mod generic;

pub use desktop::DesktopStrategy;
pub use fullscreen::FullscreenDrawParams;
pub use generic::GenericStrategy;

use crate::binding::TaskBinding;
use crate::chrome::BackgroundChrome;
use crate::layout::{LayoutContext, LayoutError, TileScale};

/// Kinds of data change a tile can be asked to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateFlag {
    Icon,
    Thumbnail,
    CornerRadius,
}

pub trait TileStrategy {
    fn name(&self) -> &'static str;

    /// Corner radius to draw at `progress` (0 = in overview, 1 = fullscreen).
    fn drawn_corner_radius(&self, params: &FullscreenDrawParams, progress: f32) -> f32;

    /// Whether a change to `changed` requires refreshing `flag`.
    fn needs_update(&self, changed: &[UpdateFlag], flag: UpdateFlag) -> bool {
        changed.contains(&flag)
    }

    fn on_fullscreen_progress(&self, progress: f32, background: &mut BackgroundChrome);

    fn on_icon_loaded(&self, binding: &mut TaskBinding);

    fn on_icon_unloaded(&self, binding: &mut TaskBinding);

    /// Size and place every thumbnail. Returns the scale used, if any.
    fn layout_thumbnails(
        &self,
        ctx: &LayoutContext,
        bindings: &mut [TaskBinding],
    ) -> Result<Option<TileScale>, LayoutError>;

    /// Whether this kind of tile can take part in split-screen selection.
    fn supports_split_select(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::IconChrome;
    use crate::descriptor::WindowDescriptor;
    use crate::layout::Gravity;
    use crate::pool::PreviewSurface;
    use recents_common::types::{Color, Point, Rect, SurfaceId, TaskKey};
    use std::rc::Rc;

    fn params() -> FullscreenDrawParams {
        FullscreenDrawParams::new(24.0, 16.0)
    }

    fn background() -> BackgroundChrome {
        BackgroundChrome::new(20, 24.0, Color::from_rgba(0, 0, 0, 255))
    }

    fn ctx() -> LayoutContext {
        LayoutContext {
            container_width: 400,
            container_height: 220,
            top_margin: 20,
            window_width: 800,
            window_height: 400,
        }
    }

    fn bindings() -> Vec<TaskBinding> {
        let icon = Rc::new(IconChrome::new("Desktop"));
        vec![
            TaskBinding::new(
                WindowDescriptor::new(TaskKey(1), "Files")
                    .with_app_bounds(Rect::new(0, 0, 200, 100))
                    .with_position(Point::new(50, 20)),
                PreviewSurface::new(SurfaceId(1)),
                Rc::clone(&icon),
            ),
            TaskBinding::new(
                WindowDescriptor::new(TaskKey(2), "Mail"),
                PreviewSurface::new(SurfaceId(2)),
                icon,
            ),
        ]
    }

    #[test]
    fn desktop_radius_ignores_progress() {
        let s = DesktopStrategy;
        for progress in [0.0, 0.25, 1.0] {
            assert!((s.drawn_corner_radius(&params(), progress) - 16.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn generic_radius_interpolates() {
        let s = GenericStrategy;
        assert!((s.drawn_corner_radius(&params(), 0.0) - 24.0).abs() < f32::EPSILON);
        assert!((s.drawn_corner_radius(&params(), 0.5) - 20.0).abs() < f32::EPSILON);
        assert!((s.drawn_corner_radius(&params(), 1.0) - 16.0).abs() < f32::EPSILON);
    }

    #[test]
    fn desktop_never_needs_corner_radius_update() {
        let s = DesktopStrategy;
        let all = [UpdateFlag::Icon, UpdateFlag::Thumbnail, UpdateFlag::CornerRadius];
        assert!(!s.needs_update(&all, UpdateFlag::CornerRadius));
        assert!(s.needs_update(&all, UpdateFlag::Icon));
        assert!(!s.needs_update(&[UpdateFlag::Thumbnail], UpdateFlag::Icon));
    }

    #[test]
    fn generic_honors_every_flag() {
        let s = GenericStrategy;
        assert!(s.needs_update(&[UpdateFlag::CornerRadius], UpdateFlag::CornerRadius));
        assert!(!s.needs_update(&[], UpdateFlag::CornerRadius));
    }

    #[test]
    fn desktop_fades_background_with_progress() {
        let s = DesktopStrategy;
        let mut bg = background();
        s.on_fullscreen_progress(0.25, &mut bg);
        assert!((bg.alpha - 0.75).abs() < f32::EPSILON);
        s.on_fullscreen_progress(1.0, &mut bg);
        assert!(bg.alpha.abs() < f32::EPSILON);
    }

    #[test]
    fn generic_leaves_background_alone() {
        let s = GenericStrategy;
        let mut bg = background();
        s.on_fullscreen_progress(0.6, &mut bg);
        assert!((bg.alpha - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn desktop_icon_loaded_sets_description_only() {
        let s = DesktopStrategy;
        let mut b = bindings();
        s.on_icon_loaded(&mut b[0]);
        assert_eq!(b[0].surface().content_description(), Some("Files"));
        s.on_icon_unloaded(&mut b[0]);
        assert_eq!(b[0].surface().content_description(), Some("Files"));
    }

    #[test]
    fn desktop_layout_positions_each_window() {
        let s = DesktopStrategy;
        let mut b = bindings();
        let scale = s.layout_thumbnails(&ctx(), &mut b).unwrap().unwrap();
        assert!((scale.width - 0.5).abs() < f32::EPSILON);

        let first = b[0].surface().layout();
        assert_eq!(
            (first.left, first.top, first.width, first.height),
            (25, 30, 100, 50)
        );
        let second = b[1].surface().layout();
        assert_eq!(
            (second.left, second.top, second.width, second.height),
            (0, 20, 100, 50)
        );
    }

    #[test]
    fn generic_layout_fills_tile() {
        let s = GenericStrategy;
        let mut b = bindings();
        assert!(s.layout_thumbnails(&ctx(), &mut b).unwrap().is_none());
        for binding in &b {
            let layout = binding.surface().layout();
            assert_eq!(layout.gravity, Gravity::Fill);
            assert_eq!((layout.width, layout.height), (400, 200));
        }
    }

    #[test]
    fn desktop_tiles_cannot_split() {
        assert!(!DesktopStrategy.supports_split_select());
        assert!(GenericStrategy.supports_split_select());
    }
}
