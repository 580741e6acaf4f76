pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, RecentsError};
pub use events::{EventBus, TileEvent};
pub use id::{new_id, TileId};
pub use types::{Color, Point, Rect, Size, SurfaceId, TaskKey};

pub type Result<T> = std::result::Result<T, RecentsError>;
