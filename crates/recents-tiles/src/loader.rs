//! Asynchronous icon/content loading contract.
//!
//! Every request carries the tile generation that issued it and a
//! cancellation token derived from that generation. Completions arrive later
//! on the same thread and are only applied by the issuing tile, while its
//! generation is current and the token is still live.

use std::cell::RefCell;
use std::rc::Rc;

use recents_common::types::TaskKey;
use recents_common::TileId;
use tokio_util::sync::CancellationToken;

/// The tile and bind generation a load was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOrigin {
    pub tile: TileId,
    pub generation: u64,
}

/// A request to load the icon and content of one window.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub key: TaskKey,
    pub title: String,
    pub origin: LoadOrigin,
    pub token: CancellationToken,
}

impl LoadRequest {
    /// Build the completion for this request.
    pub fn complete(self, outcome: LoadOutcome) -> LoadCompletion {
        LoadCompletion {
            key: self.key,
            origin: self.origin,
            token: self.token,
            outcome,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    IconLoaded,
    IconUnloaded,
    Failed(String),
}

/// Result of a load, delivered back to the tile that requested it.
#[derive(Debug, Clone)]
pub struct LoadCompletion {
    pub key: TaskKey,
    pub origin: LoadOrigin,
    pub token: CancellationToken,
    pub outcome: LoadOutcome,
}

pub trait ContentLoader {
    fn request(&mut self, request: LoadRequest);
}

/// Loader that queues requests for the host to complete later. Clones share
/// the same queue.
#[derive(Debug, Default, Clone)]
pub struct QueuedLoader {
    pending: Rc<RefCell<Vec<LoadRequest>>>,
}

impl QueuedLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every queued request, cancelled ones included.
    pub fn take_requests(&self) -> Vec<LoadRequest> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Queued requests whose generation is still live.
    pub fn live_count(&self) -> usize {
        self.pending.borrow().iter().filter(|r| !r.is_cancelled()).count()
    }
}

impl ContentLoader for QueuedLoader {
    fn request(&mut self, request: LoadRequest) {
        self.pending.borrow_mut().push(request);
    }
}
