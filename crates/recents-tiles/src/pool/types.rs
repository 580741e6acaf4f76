//! Core types for preview surface pooling.

use std::collections::HashSet;

use recents_common::types::SurfaceId;
use tracing::debug;

use crate::layout::SurfaceLayout;

/// A heavyweight rendering surface showing one window's miniature.
///
/// Deliberately not `Clone`: a surface is either idle in a pool or owned by
/// exactly one binding.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewSurface {
    id: SurfaceId,
    layout: SurfaceLayout,
    content_description: Option<String>,
}

impl PreviewSurface {
    pub fn new(id: SurfaceId) -> Self {
        Self {
            id,
            layout: SurfaceLayout::default(),
            content_description: None,
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: SurfaceLayout) {
        self.layout = layout;
    }

    pub fn content_description(&self) -> Option<&str> {
        self.content_description.as_deref()
    }

    pub fn set_content_description(&mut self, description: impl Into<String>) {
        self.content_description = Some(description.into());
    }

    /// Forget everything the previous owner put on the surface.
    pub(crate) fn reset(&mut self) {
        self.layout = SurfaceLayout::default();
        self.content_description = None;
    }
}

/// Creates new preview surfaces. Allocation is the expensive step that
/// pooling avoids.
pub trait SurfaceAllocator {
    fn allocate(&mut self) -> PreviewSurface;
}

/// Hands out surfaces with increasing ids.
#[derive(Debug, Default)]
pub struct SequentialAllocator {
    next_id: u32,
}

impl SequentialAllocator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SurfaceAllocator for SequentialAllocator {
    fn allocate(&mut self) -> PreviewSurface {
        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        debug!(surface = %id, "allocated preview surface");
        PreviewSurface::new(id)
    }
}

/// Reusable preview surfaces with an explicit checkout table.
///
/// `max_size` bounds only the idle set; the pool always allocates when it
/// runs dry rather than making a caller wait.
pub struct SurfacePool {
    pub(super) allocator: Box<dyn SurfaceAllocator>,
    /// Idle surfaces ready for reuse.
    pub(super) idle: Vec<PreviewSurface>,
    /// Surfaces currently on loan.
    pub(super) checked_out: HashSet<SurfaceId>,
    pub(super) max_size: usize,
    /// Surfaces ever allocated through this pool.
    pub(super) allocated: usize,
}

impl SurfacePool {
    /// Create a pool, eagerly allocating `initial_size` surfaces (capped at
    /// `max_size`).
    pub fn new(allocator: Box<dyn SurfaceAllocator>, max_size: usize, initial_size: usize) -> Self {
        let mut pool = Self {
            allocator,
            idle: Vec::with_capacity(max_size),
            checked_out: HashSet::new(),
            max_size,
            allocated: 0,
        };
        for _ in 0..initial_size.min(max_size) {
            let surface = pool.allocate();
            pool.idle.push(surface);
        }
        pool
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    pub fn checked_out_count(&self) -> usize {
        self.checked_out.len()
    }

    pub fn is_checked_out(&self, id: SurfaceId) -> bool {
        self.checked_out.contains(&id)
    }

    pub fn is_idle(&self, id: SurfaceId) -> bool {
        self.idle.iter().any(|s| s.id == id)
    }

    pub fn allocated_total(&self) -> usize {
        self.allocated
    }

    pub(super) fn allocate(&mut self) -> PreviewSurface {
        self.allocated += 1;
        self.allocator.allocate()
    }
}
