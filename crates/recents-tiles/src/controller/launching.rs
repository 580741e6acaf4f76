//! Launching the desktop shown by a tile.

use recents_common::TileEvent;
use tracing::{info, warn};

use crate::launch::{EndCallbacks, RecentsHost};

use super::TileController;

impl TileController {
    /// Launch every window of the desktop with the overview animation.
    ///
    /// Returns `None` when the tile is not hosted in an overview.
    ///
    /// # Panics
    ///
    /// If the host has no desktop launch controller.
    pub fn launch_as_static_tile(
        &mut self,
        host: Option<&mut dyn RecentsHost>,
    ) -> Option<EndCallbacks> {
        let host = host?;
        Some(self.launch_desktop(host, true))
    }

    /// Launch without animation; `callback` reports whether a launch was
    /// issued once it finishes.
    pub fn launch_without_animation(
        &mut self,
        host: Option<&mut dyn RecentsHost>,
        callback: impl FnOnce(bool) + 'static,
    ) {
        let Some(host) = host else {
            warn!(tile = %self.id, "launch without a recents host");
            callback(false);
            return;
        };
        let end = self.launch_desktop(host, false);
        end.add(move || callback(true));
    }

    /// Desktop tiles never take part in split-screen selection.
    pub fn confirm_second_split_select_app(&self) -> bool {
        self.strategy.supports_split_select()
    }

    pub fn set_overlay_enabled(&mut self, _enabled: bool) {}

    fn launch_desktop(&mut self, host: &mut dyn RecentsHost, animated: bool) -> EndCallbacks {
        let keys = self.task_keys();
        let end = EndCallbacks::new();
        let on_end = end.clone();

        let Some(controller) = host.desktop_launch_controller() else {
            panic!("recents host has no desktop launch controller");
        };
        info!(tile = %self.id, tasks = keys.len(), animated, "launching desktop");
        controller.launch_desktop_from_recents(
            &keys,
            animated,
            Box::new(move || on_end.execute_all_and_destroy()),
        );
        host.add_side_task_launch_callback(end.clone());

        self.publish(TileEvent::LaunchRequested {
            tile: self.id.clone(),
            animated,
        });
        end
    }
}
