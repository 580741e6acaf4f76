//! Per-window binding: a window descriptor paired with the surface that
//! shows it.

use std::rc::Rc;

use recents_common::types::TaskKey;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::chrome::{IconChrome, TouchDelegate};
use crate::descriptor::WindowDescriptor;
use crate::loader::{ContentLoader, LoadOrigin, LoadRequest};
use crate::pool::PreviewSurface;

#[derive(Debug)]
pub struct TaskBinding {
    descriptor: WindowDescriptor,
    surface: PreviewSurface,
    icon: Rc<IconChrome>,
    touch_delegate: TouchDelegate,
    /// Token of the outstanding load request, if one is in flight.
    load_token: Option<CancellationToken>,
    /// Origin of the last load request issued for this binding.
    load_origin: Option<LoadOrigin>,
}

impl TaskBinding {
    pub fn new(descriptor: WindowDescriptor, surface: PreviewSurface, icon: Rc<IconChrome>) -> Self {
        let touch_delegate = TouchDelegate::new(Rc::clone(&icon));
        Self {
            descriptor,
            surface,
            icon,
            touch_delegate,
            load_token: None,
            load_origin: None,
        }
    }

    /// Attach the descriptor data and start loading its icon and content.
    pub fn bind(
        &mut self,
        loader: &mut dyn ContentLoader,
        origin: LoadOrigin,
        generation: &CancellationToken,
    ) {
        let token = generation.child_token();
        trace!(key = %self.descriptor.key, surface = %self.surface.id(), "binding task");
        loader.request(LoadRequest {
            key: self.descriptor.key,
            title: self.descriptor.title.clone(),
            origin: origin.clone(),
            token: token.clone(),
        });
        self.load_token = Some(token);
        self.load_origin = Some(origin);
    }

    /// Whether a load issued from `origin` belongs to this binding.
    pub fn issued_from(&self, origin: &LoadOrigin) -> bool {
        self.load_origin.as_ref() == Some(origin)
    }

    pub fn key(&self) -> TaskKey {
        self.descriptor.key
    }

    pub fn descriptor(&self) -> &WindowDescriptor {
        &self.descriptor
    }

    pub fn surface(&self) -> &PreviewSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut PreviewSurface {
        &mut self.surface
    }

    pub fn icon(&self) -> &Rc<IconChrome> {
        &self.icon
    }

    pub fn touch_delegate(&self) -> &TouchDelegate {
        &self.touch_delegate
    }

    pub fn is_load_pending(&self) -> bool {
        self.load_token.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    pub(crate) fn finish_load(&mut self) {
        self.load_token = None;
    }

    /// Tear the binding down, handing back its surface.
    pub(crate) fn into_surface(self) -> PreviewSurface {
        if let Some(token) = self.load_token {
            token.cancel();
        }
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::QueuedLoader;
    use recents_common::types::SurfaceId;
    use recents_common::TileId;

    fn origin() -> LoadOrigin {
        LoadOrigin {
            tile: TileId::new(),
            generation: 1,
        }
    }

    fn binding(key: u32) -> TaskBinding {
        TaskBinding::new(
            WindowDescriptor::new(TaskKey(key), format!("window {key}")),
            PreviewSurface::new(SurfaceId(key)),
            Rc::new(IconChrome::new("Desktop")),
        )
    }

    #[test]
    fn bind_issues_load_request() {
        let mut loader = QueuedLoader::new();
        let generation = CancellationToken::new();
        let mut b = binding(1);
        assert!(!b.is_load_pending());

        b.bind(&mut loader, origin(), &generation);
        assert!(b.is_load_pending());

        let requests = loader.take_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].key, TaskKey(1));
        assert_eq!(requests[0].title, "window 1");
    }

    #[test]
    fn bind_records_request_origin() {
        let mut loader = QueuedLoader::new();
        let mut b = binding(1);
        let origin = origin();
        b.bind(&mut loader, origin.clone(), &CancellationToken::new());

        assert!(b.issued_from(&origin));
        assert!(!b.issued_from(&LoadOrigin {
            generation: 2,
            ..origin.clone()
        }));
        assert_eq!(loader.take_requests()[0].origin, origin);
    }

    #[test]
    fn generation_cancel_clears_pending() {
        let mut loader = QueuedLoader::new();
        let generation = CancellationToken::new();
        let mut b = binding(1);
        b.bind(&mut loader, origin(), &generation);
        generation.cancel();
        assert!(!b.is_load_pending());
    }

    #[test]
    fn into_surface_cancels_outstanding_load() {
        let mut loader = QueuedLoader::new();
        let generation = CancellationToken::new();
        let mut b = binding(3);
        b.bind(&mut loader, origin(), &generation);

        let surface = b.into_surface();
        assert_eq!(surface.id(), SurfaceId(3));
        assert!(loader.take_requests()[0].is_cancelled());
        assert!(!generation.is_cancelled());
    }

    #[test]
    fn touch_delegate_targets_shared_icon() {
        let b = binding(1);
        assert!(Rc::ptr_eq(b.touch_delegate().target(), b.icon()));
    }
}
