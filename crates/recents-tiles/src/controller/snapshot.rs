//! Serializable view of a tile's computed state.

use recents_common::types::{Color, Rect, SurfaceId, TaskKey};
use recents_common::TileId;
use serde::Serialize;

use crate::layout::{SurfaceLayout, TileScale};

use super::{Orientation, TileController};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileSnapshot {
    pub tile: TileId,
    pub strategy: &'static str,
    pub orientation: Orientation,
    pub scale: Option<TileScale>,
    pub background: BackgroundSnapshot,
    pub corner_radius: f32,
    pub windows: Vec<WindowSnapshot>,
    /// Surface ids in draw order.
    pub draw_order: Vec<SurfaceId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundSnapshot {
    pub bounds: Rect,
    pub tint: Color,
    pub alpha: f32,
    pub corner_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSnapshot {
    pub key: TaskKey,
    pub surface: SurfaceId,
    pub title: String,
    pub layout: SurfaceLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<String>,
}

impl TileController {
    pub fn snapshot(&self) -> TileSnapshot {
        TileSnapshot {
            tile: self.id.clone(),
            strategy: self.strategy.name(),
            orientation: self.orientation,
            scale: self.scale,
            background: BackgroundSnapshot {
                bounds: self.thumbnail_bounds(false),
                tint: self.background.effective_tint(),
                alpha: self.background.alpha,
                corner_radius: self.background.corner_radius,
            },
            corner_radius: self.draw_params.current_drawn_corner_radius,
            windows: self
                .bindings
                .iter()
                .map(|b| WindowSnapshot {
                    key: b.key(),
                    surface: b.surface().id(),
                    title: b.descriptor().title.clone(),
                    layout: b.surface().layout(),
                    content_description: b.surface().content_description().map(str::to_owned),
                })
                .collect(),
            draw_order: self.children.surfaces(),
        }
    }
}
