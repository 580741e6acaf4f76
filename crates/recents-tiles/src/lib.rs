pub mod binding;
pub mod chrome;
pub mod controller;
pub mod descriptor;
pub mod hierarchy;
pub mod launch;
pub mod layout;
pub mod loader;
pub mod pool;
pub mod profile;
pub mod strategy;

pub use binding::TaskBinding;
pub use controller::{TileController, TileSnapshot};
pub use descriptor::WindowDescriptor;
pub use launch::{DesktopLaunchController, EndCallbacks, RecentsHost};
pub use layout::{LayoutError, SurfaceLayout, TileScale};
pub use loader::{
    ContentLoader, LoadCompletion, LoadOrigin, LoadOutcome, LoadRequest, QueuedLoader,
};
pub use pool::{PreviewSurface, SurfacePool, SurfaceSource};
pub use profile::{DeviceProfile, TileSettings};
pub use strategy::{DesktopStrategy, GenericStrategy, TileStrategy};
