//! Launching a whole desktop from its tile.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use recents_common::types::TaskKey;

type Callback = Box<dyn FnOnce()>;

/// Callbacks to run once a launch finishes. Clones share the same list.
///
/// After [`EndCallbacks::execute_all_and_destroy`] the list is spent:
/// callbacks added later run immediately.
#[derive(Clone)]
pub struct EndCallbacks {
    inner: Rc<RefCell<Option<Vec<Callback>>>>,
}

impl EndCallbacks {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Some(Vec::new()))),
        }
    }

    pub fn add(&self, callback: impl FnOnce() + 'static) {
        if let Some(list) = self.inner.borrow_mut().as_mut() {
            list.push(Box::new(callback));
            return;
        }
        callback();
    }

    pub fn execute_all_and_destroy(&self) {
        // Take the list first so callbacks may add to (or run) this one.
        let callbacks = self.inner.borrow_mut().take();
        for callback in callbacks.into_iter().flatten() {
            callback();
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.borrow().is_none()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EndCallbacks {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EndCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndCallbacks")
            .field("pending", &self.len())
            .field("destroyed", &self.is_destroyed())
            .finish()
    }
}

/// Brings every window of a desktop session to the foreground.
pub trait DesktopLaunchController {
    /// Launch the desktop holding `task_keys`; `on_end` runs when the
    /// transition completes.
    fn launch_desktop_from_recents(
        &mut self,
        task_keys: &[TaskKey],
        animated: bool,
        on_end: Box<dyn FnOnce()>,
    );
}

/// The overview surrounding a tile.
pub trait RecentsHost {
    fn desktop_launch_controller(&mut self) -> Option<&mut dyn DesktopLaunchController>;

    /// Keep `callbacks` alive until any running overview animation ends.
    fn add_side_task_launch_callback(&mut self, callbacks: EndCallbacks);
}
