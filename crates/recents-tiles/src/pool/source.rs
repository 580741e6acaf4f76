//! Where a tile gets its preview surfaces from.

use tracing::debug;

use super::{PreviewSurface, SequentialAllocator, SurfaceAllocator, SurfacePool};

/// Surface allocation strategy of a tile.
///
/// The two variants have different lifetimes and are not interchangeable:
/// pooled surfaces are returned for reuse, direct surfaces are created for
/// one bind and dropped when their generation ends.
pub enum SurfaceSource {
    Pooled(SurfacePool),
    Direct(Box<dyn SurfaceAllocator>),
}

impl SurfaceSource {
    pub fn pooled(max_size: usize, initial_size: usize) -> Self {
        SurfaceSource::Pooled(SurfacePool::new(
            Box::new(SequentialAllocator::new()),
            max_size,
            initial_size,
        ))
    }

    pub fn direct() -> Self {
        SurfaceSource::Direct(Box::new(SequentialAllocator::new()))
    }

    pub fn is_pooled(&self) -> bool {
        matches!(self, SurfaceSource::Pooled(_))
    }

    pub fn pool(&self) -> Option<&SurfacePool> {
        match self {
            SurfaceSource::Pooled(pool) => Some(pool),
            SurfaceSource::Direct(_) => None,
        }
    }

    pub fn obtain(&mut self) -> PreviewSurface {
        match self {
            SurfaceSource::Pooled(pool) => pool.acquire(),
            SurfaceSource::Direct(allocator) => allocator.allocate(),
        }
    }

    /// Take back a surface whose binding is being torn down.
    pub fn reclaim(&mut self, surface: PreviewSurface) {
        match self {
            SurfaceSource::Pooled(pool) => {
                pool.release(surface);
            }
            SurfaceSource::Direct(_) => {
                debug!(surface = %surface.id(), "dropping directly allocated surface");
            }
        }
    }
}
