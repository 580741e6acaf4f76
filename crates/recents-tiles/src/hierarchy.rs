//! Child ordering of a tile. Later children draw on top of earlier ones.

use recents_common::types::SurfaceId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Child {
    Background,
    Icon,
    Surface(SurfaceId),
}

/// Ordered children of a tile. Surfaces are always inserted at the anchor,
/// directly after the chrome present from construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildList {
    children: Vec<Child>,
    anchor: usize,
}

impl ChildList {
    pub fn new() -> Self {
        let children = vec![Child::Background, Child::Icon];
        let anchor = children.len();
        Self { children, anchor }
    }

    pub fn insert_surface(&mut self, id: SurfaceId) {
        self.children.insert(self.anchor, Child::Surface(id));
    }

    /// Returns `false` if the surface was not attached.
    pub fn remove_surface(&mut self, id: SurfaceId) -> bool {
        match self.children.iter().position(|c| *c == Child::Surface(id)) {
            Some(idx) => {
                self.children.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains_surface(&self, id: SurfaceId) -> bool {
        self.children.contains(&Child::Surface(id))
    }

    /// Attached surfaces in draw order.
    pub fn surfaces(&self) -> Vec<SurfaceId> {
        self.children
            .iter()
            .filter_map(|c| match c {
                Child::Surface(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for ChildList {
    fn default() -> Self {
        Self::new()
    }
}
