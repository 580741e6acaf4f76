//! Core types and constructors for TileController.

use std::rc::Rc;

use recents_common::types::{Point, Size, TaskKey};
use recents_common::{EventBus, TileEvent, TileId};
use recents_config::RecentsConfig;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::binding::TaskBinding;
use crate::chrome::{BackgroundChrome, IconChrome};
use crate::hierarchy::ChildList;
use crate::layout::TileScale;
use crate::loader::ContentLoader;
use crate::pool::SurfaceSource;
use crate::profile::{DeviceProfile, TileSettings};
use crate::strategy::{DesktopStrategy, FullscreenDrawParams, TileStrategy};

/// Display orientation the overview is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
    Seascape,
}

/// One overview tile: its chrome, the current generation of window
/// bindings, and the surfaces backing them.
pub struct TileController {
    pub(super) id: TileId,
    pub(super) profile: DeviceProfile,
    pub(super) settings: TileSettings,
    pub(super) strategy: Box<dyn TileStrategy>,
    pub(super) surfaces: SurfaceSource,
    pub(super) loader: Box<dyn ContentLoader>,
    /// Current generation, in bind order.
    pub(super) bindings: Vec<TaskBinding>,
    pub(super) children: ChildList,
    pub(super) background: BackgroundChrome,
    pub(super) icon: Rc<IconChrome>,
    pub(super) draw_params: FullscreenDrawParams,
    /// Parent token of every load request of the current generation.
    pub(super) generation: CancellationToken,
    pub(super) generation_count: u64,
    /// Full tile size from the last `update_task_size`.
    pub(super) container_size: Option<Size>,
    pub(super) scale: Option<TileScale>,
    pub(super) orientation: Orientation,
    pub(super) visible: bool,
    /// Top-left of the tile inside the top-level container.
    pub(super) position_in_container: Point,
    pub(super) events: Option<EventBus>,
}

impl TileController {
    pub fn new(
        profile: DeviceProfile,
        settings: TileSettings,
        strategy: Box<dyn TileStrategy>,
        loader: Box<dyn ContentLoader>,
    ) -> Self {
        let surfaces = if settings.use_direct_allocation {
            SurfaceSource::direct()
        } else {
            SurfaceSource::pooled(settings.pool_max_size, settings.pool_initial_size)
        };
        let background = BackgroundChrome::new(
            profile.thumbnail_top_margin_px,
            settings.task_corner_radius,
            settings.background_tint,
        );
        let draw_params =
            FullscreenDrawParams::new(settings.task_corner_radius, profile.window_corner_radius);
        let icon = Rc::new(IconChrome::new(settings.icon_label.clone()));

        let mut tile = Self {
            id: TileId::new(),
            profile,
            settings,
            strategy,
            surfaces,
            loader,
            bindings: Vec::new(),
            children: ChildList::new(),
            background,
            icon,
            draw_params,
            generation: CancellationToken::new(),
            generation_count: 0,
            container_size: None,
            scale: None,
            orientation: Orientation::default(),
            visible: true,
            position_in_container: Point::ORIGIN,
            events: None,
        };
        tile.draw_params.current_drawn_corner_radius =
            tile.strategy.drawn_corner_radius(&tile.draw_params, 0.0);
        tile
    }

    /// A desktop tile configured from `config`.
    pub fn desktop(config: &RecentsConfig, loader: Box<dyn ContentLoader>) -> Self {
        Self::new(
            DeviceProfile::from(config),
            TileSettings::from(config),
            Box::new(DesktopStrategy),
            loader,
        )
    }

    /// Replace the surface source. Only allowed while no generation is bound.
    pub fn with_surface_source(mut self, surfaces: SurfaceSource) -> Self {
        debug_assert!(self.bindings.is_empty());
        self.surfaces = surfaces;
        self
    }

    /// Publish lifecycle events on `bus`.
    pub fn with_events(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    pub(super) fn publish(&self, event: TileEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }

    // -- Accessors --

    pub fn id(&self) -> &TileId {
        &self.id
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn bindings(&self) -> &[TaskBinding] {
        &self.bindings
    }

    pub fn binding(&self, key: TaskKey) -> Option<&TaskBinding> {
        self.bindings.iter().find(|b| b.key() == key)
    }

    /// Keys of the bound windows, in bind order.
    pub fn task_keys(&self) -> Vec<TaskKey> {
        self.bindings.iter().map(TaskBinding::key).collect()
    }

    pub fn surfaces(&self) -> &SurfaceSource {
        &self.surfaces
    }

    pub fn children(&self) -> &ChildList {
        &self.children
    }

    pub fn background(&self) -> &BackgroundChrome {
        &self.background
    }

    pub fn icon(&self) -> &Rc<IconChrome> {
        &self.icon
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    pub fn settings(&self) -> &TileSettings {
        &self.settings
    }

    pub fn scale(&self) -> Option<TileScale> {
        self.scale
    }

    pub fn container_size(&self) -> Option<Size> {
        self.container_size
    }

    pub fn draw_params(&self) -> &FullscreenDrawParams {
        &self.draw_params
    }

    /// Number of `bind` calls so far.
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_position_in_container(&mut self, position: Point) {
        self.position_in_container = position;
    }
}
