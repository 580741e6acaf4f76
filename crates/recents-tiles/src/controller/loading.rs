use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::loader::{LoadCompletion, LoadOrigin, LoadOutcome};

use super::TileController;

impl TileController {
    /// Cancel every outstanding load of the current generation and start a
    /// fresh parent token for the next one.
    pub fn cancel_pending_loads(&mut self) {
        self.generation.cancel();
        self.generation = CancellationToken::new();
    }

    /// Origin stamped on the load requests of the current generation.
    pub(super) fn load_origin(&self) -> LoadOrigin {
        LoadOrigin {
            tile: self.id.clone(),
            generation: self.generation_count,
        }
    }

    /// Apply a finished load. Returns whether it was applied; completions of
    /// an earlier generation, of another tile, or for unknown windows are
    /// dropped.
    pub fn on_load_complete(&mut self, completion: LoadCompletion) -> bool {
        if completion.token.is_cancelled() || completion.origin != self.load_origin() {
            debug!(tile = %self.id, key = %completion.key, "stale load ignored");
            return false;
        }
        let Some(binding) = self
            .bindings
            .iter_mut()
            .find(|b| b.key() == completion.key && b.issued_from(&completion.origin))
        else {
            debug!(tile = %self.id, key = %completion.key, "load for unknown task ignored");
            return false;
        };

        match completion.outcome {
            LoadOutcome::IconLoaded => self.strategy.on_icon_loaded(binding),
            LoadOutcome::IconUnloaded => self.strategy.on_icon_unloaded(binding),
            LoadOutcome::Failed(reason) => {
                warn!(tile = %self.id, key = %completion.key, "content load failed: {reason}");
            }
        }
        binding.finish_load();
        true
    }
}
