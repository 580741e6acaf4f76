use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::TileId;

/// Lifecycle notifications emitted by overview tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TileEvent {
    Bound { tile: TileId, count: usize },
    Recycled { tile: TileId },
    LaunchRequested { tile: TileId, animated: bool },
    #[serde(other)]
    Unknown,
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<TileEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TileEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: TileEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}
