//! Builds a desktop tile from a window list and reports its layout.

use std::fs;
use std::io::Read;
use std::path::Path;

use recents_common::types::Size;
use recents_common::{RecentsError, Result};
use recents_config::RecentsConfig;
use recents_tiles::controller::Orientation;
use recents_tiles::{LoadOutcome, QueuedLoader, TileController, TileSnapshot, WindowDescriptor};
use tracing::{debug, info};

/// Parse a JSON array of window descriptors.
pub fn read_windows(mut reader: impl Read) -> Result<Vec<WindowDescriptor>> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let windows: Vec<WindowDescriptor> = serde_json::from_str(&raw)?;
    Ok(windows)
}

/// Read the window list from `path`, or from stdin when `None`.
pub fn load_windows(path: Option<&Path>) -> Result<Vec<WindowDescriptor>> {
    let windows = match path {
        Some(path) => read_windows(fs::File::open(path)?)?,
        None => read_windows(std::io::stdin().lock())?,
    };
    debug!(count = windows.len(), "window list loaded");
    Ok(windows)
}

/// Bind `windows` into a desktop tile of `size`, let every icon load
/// finish, and snapshot the result.
pub fn render_tile(
    config: &RecentsConfig,
    windows: &[WindowDescriptor],
    size: Size,
) -> Result<TileSnapshot> {
    let loader = QueuedLoader::new();
    let mut tile = TileController::desktop(config, Box::new(loader.clone()));

    tile.bind(windows, Orientation::Portrait);
    tile.update_task_size(size).map_err(|e| RecentsError::Layout(e.to_string()))?;

    let applied = loader
        .take_requests()
        .into_iter()
        .map(|request| tile.on_load_complete(request.complete(LoadOutcome::IconLoaded)))
        .filter(|applied| *applied)
        .count();
    info!(
        windows = tile.binding_count(),
        loads = applied,
        direct = config.tile.use_direct_allocation,
        "tile rendered"
    );
    Ok(tile.snapshot())
}
