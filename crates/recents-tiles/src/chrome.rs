//! Always-present tile chrome: the rounded background and the shared
//! desktop icon.

use std::rc::Rc;

use recents_common::types::{Color, Rect};
use serde::Serialize;

/// Rounded, tinted background behind the thumbnails. Its top edge sits
/// below the title bar margin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundChrome {
    pub top_margin: i32,
    pub corner_radius: f32,
    pub tint: Color,
    pub alpha: f32,
}

impl BackgroundChrome {
    pub fn new(top_margin: i32, corner_radius: f32, tint: Color) -> Self {
        Self {
            top_margin,
            corner_radius,
            tint,
            alpha: 1.0,
        }
    }

    /// Background bounds in tile-local coordinates for a tile of the given size.
    pub fn bounds(&self, tile_width: i32, tile_height: i32) -> Rect {
        Rect::new(0, self.top_margin, tile_width, tile_height.max(self.top_margin))
    }

    /// Tint with the current alpha applied.
    pub fn effective_tint(&self) -> Color {
        self.tint.with_alpha(self.alpha)
    }
}

/// The desktop icon and label. One instance is shared by every binding of a
/// tile, since all windows of a desktop show the same icon.
#[derive(Debug, PartialEq, Eq)]
pub struct IconChrome {
    label: String,
}

impl IconChrome {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Routes touches on a thumbnail to the tile icon.
#[derive(Debug, Clone)]
pub struct TouchDelegate {
    target: Rc<IconChrome>,
}

impl TouchDelegate {
    pub fn new(target: Rc<IconChrome>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Rc<IconChrome> {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_bounds_start_below_margin() {
        let bg = BackgroundChrome::new(20, 16.0, Color::from_rgba(0, 0, 0, 255));
        assert_eq!(bg.bounds(400, 220), Rect::new(0, 20, 400, 220));
    }

    #[test]
    fn background_bounds_never_invert() {
        let bg = BackgroundChrome::new(20, 16.0, Color::from_rgba(0, 0, 0, 255));
        assert_eq!(bg.bounds(400, 5).height(), 0);
    }

    #[test]
    fn effective_tint_follows_alpha() {
        let mut bg = BackgroundChrome::new(0, 0.0, Color::from_rgba(10, 20, 30, 255));
        bg.alpha = 0.0;
        assert_eq!(bg.effective_tint().a, 0);
        bg.alpha = 1.0;
        assert_eq!(bg.effective_tint().a, 255);
    }

    #[test]
    fn touch_delegate_shares_icon() {
        let icon = Rc::new(IconChrome::new("Desktop"));
        let delegate = TouchDelegate::new(Rc::clone(&icon));
        assert!(Rc::ptr_eq(delegate.target(), &icon));
        assert_eq!(delegate.target().label(), "Desktop");
        assert_eq!(Rc::strong_count(&icon), 2);
    }
}
